//! WebGPU rendering: shape tessellation, frame composition, pipeline

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{city_scene, golf_scene};
pub use vertex::{Vertex, colors};
