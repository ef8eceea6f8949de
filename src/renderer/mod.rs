//! WebGPU rendering module
//!
//! Triangle-list rendering of the baseball field into a canvas surface.

pub mod field;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use field::{field_scene, RunnerMarker};
pub use pipeline::RenderState;
pub use vertex::Vertex;
