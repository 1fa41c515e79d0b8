use crate::device::FrameSource;

/// Where the frame loop currently is.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum FramePhase {
    /// Waiting for the next redraw callback.
    #[default]
    Idle,
    /// Building one draw submission.
    Encoding,
}

/// Result of a single pass through the frame loop.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    /// Commands were encoded, submitted and presented.
    Submitted,
    /// No frame target (or a transient surface error); nothing was drawn.
    Skipped,
    /// The surface cannot recover; the application should exit.
    Fatal,
}

/// Drives one acquire → encode → present cycle per redraw callback.
///
/// Callbacks never overlap (the event loop runs each one to completion), so
/// the loop is strictly `Idle → Encoding → Idle`.
#[derive(Debug, Default)]
pub struct FrameLoop {
    phase: FramePhase,
    submitted: u64,
    skipped: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> FramePhase {
        self.phase
    }

    /// Frames submitted so far.
    #[inline]
    pub fn submitted(&self) -> u64 {
        self.submitted
    }

    /// Frames skipped for lack of a frame target.
    #[inline]
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Runs one frame.
    ///
    /// `encode` only runs when a frame target was acquired. A missing target
    /// or a recoverable surface error skips the frame without raising; the
    /// next callback tries again.
    pub fn run<S, F>(&mut self, source: &mut S, encode: F) -> FrameOutcome
    where
        S: FrameSource + ?Sized,
        F: FnOnce(&S, &mut S::Frame),
    {
        debug_assert_eq!(self.phase, FramePhase::Idle, "frame loop re-entered");

        let mut frame = match source.acquire() {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                log::trace!("no frame target; skipping frame");
                return self.skip();
            }
            Err(err) => {
                log::debug!("surface error: {err}");
                if source.recover(err).is_fatal() {
                    log::error!("surface error is unrecoverable");
                    return FrameOutcome::Fatal;
                }
                return self.skip();
            }
        };

        self.phase = FramePhase::Encoding;
        encode(&*source, &mut frame);
        source.present(frame);
        self.phase = FramePhase::Idle;

        self.submitted += 1;
        FrameOutcome::Submitted
    }

    fn skip(&mut self) -> FrameOutcome {
        self.skipped += 1;
        FrameOutcome::Skipped
    }
}
