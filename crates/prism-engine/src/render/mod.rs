//! GPU rendering subsystem.
//!
//! Each renderer owns its GPU resources (pipeline, buffers, bindings) and
//! creates them on first use. Renderers draw over a frame target that the
//! frame loop has already cleared.

mod common;
mod ctx;
#[cfg(test)]
pub(crate) mod headless;
mod transformed;
mod triangle;
mod vertex;
mod viewport;

pub use ctx::{RenderCtx, RenderTarget};
pub use transformed::TransformRenderer;
pub use triangle::TriangleRenderer;
pub use vertex::{ColorVertex, TRIANGLE_DRAW, TRIANGLE_VERTICES};
pub use viewport::Viewport;
