//! Prism engine crate.
//!
//! Platform + GPU runtime for the triangle renderers: window loop, wgpu
//! device/surface, per-frame state machine, the two triangle renderers and
//! the transform math behind the spinning one.

pub mod core;
pub mod device;
pub mod logging;
pub mod render;
pub mod time;
pub mod transform;
pub mod window;
