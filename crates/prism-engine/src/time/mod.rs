//! Frame timing.
//!
//! One `FrameClock` per window, ticked once per redraw callback. Timing only
//! feeds diagnostics; animation advances per frame, not per second.

mod frame_clock;
mod frame_rate;

pub use frame_clock::{FrameClock, FrameTime};
pub use frame_rate::FrameRateMeter;
