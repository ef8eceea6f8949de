//! Baseball field scene
//!
//! Builds the whole frame as one triangle list in unit-square field
//! coordinates: grass, infield dirt, mound, foul lines, plates, and the
//! runner markers for whoever is currently on the basepath.

use glam::Vec2;
use std::f32::consts::PI;

use super::shapes;
use super::vertex::{colors, Vertex};
use crate::consts::{MARKER_OUTLINE, MARKER_RADIUS};
use crate::sim::WAYPOINTS;

/// A runner to draw on the basepath
#[derive(Debug, Clone, Copy)]
pub struct RunnerMarker {
    pub pos: Vec2,
    pub color: [f32; 4],
}

const CIRCLE_SEGMENTS: u32 = 48;
const WEDGE_SEGMENTS: u32 = 64;

/// Home plate pentagon, point toward the backstop
const HOME_PLATE: [Vec2; 5] = [
    Vec2::new(0.48, 0.13),
    Vec2::new(0.48, 0.11),
    Vec2::new(0.5, 0.10),
    Vec2::new(0.52, 0.11),
    Vec2::new(0.52, 0.13),
];

/// Inner grass diamond inside the dirt infield
const GRASS_DIAMOND: [Vec2; 4] = [
    Vec2::new(0.5, 0.15),
    Vec2::new(0.75, 0.4),
    Vec2::new(0.5, 0.6),
    Vec2::new(0.25, 0.4),
];

/// Build the full field scene plus runner markers
pub fn field_scene(markers: &[RunnerMarker]) -> Vec<Vertex> {
    let mut verts = Vec::with_capacity(1024);

    // Outfield grass fills the scene
    verts.extend(shapes::rect(
        Vec2::ZERO,
        Vec2::ONE,
        colors::GRASS,
    ));

    // Infield dirt: pie wedge fanning out from behind home plate
    verts.extend(shapes::wedge(
        Vec2::new(0.5, 0.1),
        0.7,
        PI / 4.0,
        3.0 * PI / 4.0,
        colors::DIRT,
        WEDGE_SEGMENTS,
    ));

    verts.extend(shapes::polygon(&GRASS_DIAMOND, colors::GRASS));

    // Pitcher's mound and rubber
    verts.extend(shapes::circle(
        Vec2::new(0.5, 0.37),
        0.05,
        colors::DIRT,
        CIRCLE_SEGMENTS,
    ));
    verts.extend(shapes::rect(
        Vec2::new(0.485, 0.365),
        Vec2::new(0.03, 0.01),
        colors::CHALK,
    ));

    // Foul lines from home plate, clipped at the field edges
    verts.extend(shapes::line(
        Vec2::new(0.5, 0.1),
        Vec2::new(1.0, 0.6),
        0.006,
        colors::CHALK,
    ));
    verts.extend(shapes::line(
        Vec2::new(0.5, 0.1),
        Vec2::new(0.0, 0.6),
        0.006,
        colors::CHALK,
    ));

    // Home plate with a dark outline under the chalk
    verts.extend(shapes::polygon(
        &scaled_about_centroid(&HOME_PLATE, 1.25),
        colors::OUTLINE,
    ));
    verts.extend(shapes::polygon(&HOME_PLATE, colors::CHALK));

    // First, second, third
    for base in &WAYPOINTS[1..] {
        verts.extend(shapes::base_marker(*base, 0.026, colors::OUTLINE));
        verts.extend(shapes::base_marker(*base, 0.02, colors::CHALK));
    }

    // Runners on top, white-ringed
    for marker in markers {
        verts.extend(shapes::circle(
            marker.pos,
            MARKER_RADIUS + MARKER_OUTLINE,
            colors::CHALK,
            CIRCLE_SEGMENTS,
        ));
        verts.extend(shapes::circle(
            marker.pos,
            MARKER_RADIUS,
            marker.color,
            CIRCLE_SEGMENTS,
        ));
    }

    verts
}

fn scaled_about_centroid(points: &[Vec2; 5], factor: f32) -> [Vec2; 5] {
    let centroid = points.iter().copied().sum::<Vec2>() / points.len() as f32;
    points.map(|p| centroid + (p - centroid) * factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_nonempty_without_runners() {
        assert!(!field_scene(&[]).is_empty());
    }

    #[test]
    fn test_runners_add_vertices() {
        let base = field_scene(&[]).len();
        let with_runner = field_scene(&[RunnerMarker {
            pos: Vec2::new(0.5, 0.1),
            color: colors::JOEY,
        }])
        .len();
        assert_eq!(with_runner - base, (CIRCLE_SEGMENTS * 3 * 2) as usize);
    }

    #[test]
    fn test_bases_sit_on_path_waypoints() {
        // The drawn bases and the basepath corners must agree
        assert_eq!(WAYPOINTS[1], Vec2::new(0.795, 0.385));
        assert_eq!(WAYPOINTS[2], Vec2::new(0.5, 0.65));
        assert_eq!(WAYPOINTS[3], Vec2::new(0.205, 0.385));
    }
}
