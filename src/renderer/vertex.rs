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

/// Colors for game elements
pub mod colors {
    /// Course green, used as the golf clear color
    pub const FAIRWAY: [f64; 4] = [0.03, 0.22, 0.05, 1.0];
    pub const BALL: [f32; 4] = [0.75, 0.75, 0.75, 1.0];
    pub const BALL_OUTLINE: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BALL_SHADOW: [f32; 4] = [0.0, 0.0, 0.0, 0.35];
    pub const CUP: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const CUP_RIM: [f32; 4] = [0.9, 0.9, 0.9, 1.0];
    pub const OBSTACLE: [f32; 4] = [0.05, 0.05, 0.05, 1.0];
    pub const PUDDLE: [f32; 4] = [0.12, 0.56, 1.0, 0.9];
    pub const AIM_ANCHOR: [f32; 4] = [0.12, 0.56, 1.0, 1.0];
    pub const AIM_LINE: [f32; 4] = [1.0, 0.1, 0.1, 1.0];
    pub const TEE_MARK: [f32; 4] = [1.0, 1.0, 1.0, 0.5];

    /// City mode clear color
    pub const CITY_BG: [f64; 4] = [0.97, 0.97, 0.97, 1.0];
    pub const ZONE_RESIDENTIAL: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const ZONE_COMMERCIAL: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const ZONE_INDUSTRIAL: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const BAR_FILL: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const BAR_FRAME: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
