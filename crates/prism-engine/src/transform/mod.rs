//! Per-frame model/view/projection math.
//!
//! Convention (fixed across the engine and its shaders):
//! - column vectors, right-multiplication: `clip = projection * view * model * v`
//! - column-major storage (glam layout, matches WGSL `mat4x4<f32>`)
//! - depth maps into wgpu's `0..1` range

mod angle;
mod matrices;
mod uniforms;

pub use angle::AngleCounter;
pub use matrices::{model_matrix, perspective_projection, rotation_y, scale_matrix, view_matrix};
pub use uniforms::{Transform, TransformConfig, Uniforms};
