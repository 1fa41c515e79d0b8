//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the
//! renderer programs, plus the per-frame state machine.

mod app;
mod ctx;
mod frame_loop;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
pub use frame_loop::{FrameLoop, FrameOutcome, FramePhase};
