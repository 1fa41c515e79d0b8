/// Rotation angle in whole degrees, advanced once per rendered frame.
///
/// Rotation speed is tied to the frame rate, not wall-clock time.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct AngleCounter {
    degrees: u32,
}

impl AngleCounter {
    pub const FULL_TURN: u32 = 360;

    #[inline]
    pub const fn new() -> Self {
        Self { degrees: 0 }
    }

    /// Starts the counter at `degrees`, wrapped into `[0, 360)`.
    #[inline]
    pub const fn starting_at(degrees: u32) -> Self {
        Self {
            degrees: degrees % Self::FULL_TURN,
        }
    }

    /// Current angle in degrees, always in `[0, 360)`.
    #[inline]
    pub const fn degrees(self) -> u32 {
        self.degrees
    }

    #[inline]
    pub fn radians(self) -> f32 {
        (self.degrees as f32).to_radians()
    }

    /// Steps one degree forward and returns the new angle.
    #[inline]
    pub fn advance(&mut self) -> u32 {
        self.degrees = (self.degrees + 1) % Self::FULL_TURN;
        self.degrees
    }
}
