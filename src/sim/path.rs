//! The base path
//!
//! A closed quadrilateral through the four bases, in unit-square field
//! coordinates. Base-running progress in [0, 1] splits into four equal
//! quarters, one per basepath, each a straight lerp between two waypoints.

use glam::Vec2;

use crate::lerp;

/// Corner waypoints of the path: home, first, second, third.
///
/// Progress 0 and 1 both land on home plate.
pub const WAYPOINTS: [Vec2; 4] = [
    Vec2::new(0.5, 0.1),    // home
    Vec2::new(0.795, 0.385), // first
    Vec2::new(0.5, 0.65),   // second
    Vec2::new(0.205, 0.385), // third
];

/// Position on the basepath for progress in [0, 1].
///
/// Callers clamp progress before calling; values outside [0, 1] are not
/// meaningful here.
pub fn base_position(progress: f64) -> Vec2 {
    let progress = progress as f32;
    let (start, end, quarter_start) = if progress <= 0.25 {
        (WAYPOINTS[0], WAYPOINTS[1], 0.0)
    } else if progress <= 0.5 {
        (WAYPOINTS[1], WAYPOINTS[2], 0.25)
    } else if progress <= 0.75 {
        (WAYPOINTS[2], WAYPOINTS[3], 0.5)
    } else {
        (WAYPOINTS[3], WAYPOINTS[0], 0.75)
    };

    let t = (progress - quarter_start) * 4.0;
    Vec2::new(lerp(start.x, end.x, t), lerp(start.y, end.y, t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-5;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn test_path_is_closed() {
        assert!(close(base_position(0.0), base_position(1.0)));
    }

    #[test]
    fn test_quarters_land_on_bases() {
        assert!(close(base_position(0.0), WAYPOINTS[0]));
        assert!(close(base_position(0.25), WAYPOINTS[1]));
        assert!(close(base_position(0.5), WAYPOINTS[2]));
        assert!(close(base_position(0.75), WAYPOINTS[3]));
    }

    #[test]
    fn test_midpoint_of_first_basepath() {
        let mid = (WAYPOINTS[0] + WAYPOINTS[1]) / 2.0;
        assert!(close(base_position(0.125), mid));
    }

    proptest! {
        #[test]
        fn prop_position_stays_in_unit_square(p in 0.0f64..=1.0) {
            let pos = base_position(p);
            prop_assert!((0.0..=1.0).contains(&pos.x));
            prop_assert!((0.0..=1.0).contains(&pos.y));
        }

        #[test]
        fn prop_continuous_across_quarter_boundaries(q in 1usize..4) {
            let boundary = q as f64 * 0.25;
            let before = base_position(boundary - 1e-6);
            let after = base_position(boundary + 1e-6);
            prop_assert!((before - after).length() < 1e-4);
        }
    }
}
