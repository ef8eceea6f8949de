//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for field elements
pub mod colors {
    /// Outfield and inner-diamond grass (#228B22)
    pub const GRASS: [f32; 4] = [0.133, 0.545, 0.133, 1.0];
    /// Infield dirt (#8B7355)
    pub const DIRT: [f32; 4] = [0.545, 0.451, 0.333, 1.0];
    /// Foul lines, bases, pitcher's rubber
    pub const CHALK: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Base and marker outlines
    pub const OUTLINE: [f32; 4] = [0.05, 0.05, 0.05, 1.0];
    /// Joey's marker (#DC2626)
    pub const JOEY: [f32; 4] = [0.863, 0.149, 0.149, 1.0];
    /// Bobby's marker (#2563EB)
    pub const BOBBY: [f32; 4] = [0.145, 0.388, 0.922, 1.0];
    /// Page background behind the letterboxed field
    pub const BACKGROUND: [f32; 4] = [0.07, 0.09, 0.07, 1.0];
}
