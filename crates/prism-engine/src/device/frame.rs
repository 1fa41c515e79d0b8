use super::SurfaceErrorAction;

/// Represents a single acquired frame.
///
/// This object is short-lived and must be finalized promptly. Holding the surface
/// texture prevents acquisition of subsequent frames.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

/// Host side of the per-frame handshake: hand out a frame target, take back
/// a finished frame.
pub trait FrameSource {
    type Frame;

    /// Acquires the next frame target.
    ///
    /// `Ok(None)` means no target is available right now (e.g. the window is
    /// minimized); the caller skips the frame.
    fn acquire(&mut self) -> Result<Option<Self::Frame>, wgpu::SurfaceError>;

    /// Attempts to recover from an acquisition error.
    fn recover(&mut self, err: wgpu::SurfaceError) -> SurfaceErrorAction;

    /// Submits the recorded commands and presents the frame.
    fn present(&mut self, frame: Self::Frame);
}
