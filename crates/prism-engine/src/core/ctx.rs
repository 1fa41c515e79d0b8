use winit::window::{Window, WindowId};

use crate::device::Gpu;
use crate::render::{RenderCtx, RenderTarget, Viewport};
use crate::time::FrameTime;

use super::app::AppControl;
use super::frame_loop::{FrameLoop, FrameOutcome};

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub frames: &'a mut FrameLoop,
    pub time: FrameTime,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Current drawable viewport (physical pixels).
    pub fn viewport(&self) -> Viewport {
        Viewport::from_physical(self.gpu.size())
    }

    /// Runs one frame: acquires the frame target, clears it to `clear`, lets
    /// `draw` encode into it, then submits and presents.
    ///
    /// Without a frame target `draw` is not called and the frame is skipped.
    /// Returns `Exit` only when the surface cannot recover.
    pub fn render<F>(&mut self, clear: wgpu::Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let viewport = self.viewport();
        let window = self.window.window;

        let outcome = self.frames.run(&mut *self.gpu, |gpu, frame| {
            // Clear pass, dropped before renderers borrow the encoder.
            {
                let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("prism clear"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &frame.view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(clear),
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                    multiview_mask: None,
                });
            }

            let rctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format(), viewport);
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            draw(&rctx, &mut target);

            window.pre_present_notify();
        });

        match outcome {
            FrameOutcome::Fatal => AppControl::Exit,
            FrameOutcome::Submitted | FrameOutcome::Skipped => AppControl::Continue,
        }
    }
}
