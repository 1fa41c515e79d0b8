//! Offscreen frame source on wgpu's noop backend.

use std::collections::VecDeque;

use crate::device::{FrameSource, SurfaceErrorAction};

use super::{RenderCtx, RenderTarget, Viewport};

/// Noop device plus an offscreen color target.
///
/// Implements [`FrameSource`]: each scripted `false` withholds the frame
/// target for one acquisition; an empty script always hands one out.
pub(crate) struct Headless {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub format: wgpu::TextureFormat,
    pub viewport: Viewport,
    view: wgpu::TextureView,
    targets: VecDeque<bool>,
    pub submissions: usize,
}

impl Headless {
    pub fn new(width: u32, height: u32) -> Self {
        let (device, queue) = wgpu::Device::noop(&wgpu::DeviceDescriptor::default());
        let format = wgpu::TextureFormat::Rgba8Unorm;

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("headless target"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            device,
            queue,
            format,
            viewport: Viewport::new(width as f32, height as f32),
            view,
            targets: VecDeque::new(),
            submissions: 0,
        }
    }

    /// Queues frame-target availability for the next acquisitions.
    pub fn script(mut self, targets: &[bool]) -> Self {
        self.targets.extend(targets.iter().copied());
        self
    }

    pub fn ctx(&self) -> RenderCtx<'_> {
        RenderCtx::new(&self.device, &self.queue, self.format, self.viewport)
    }

    /// Encodes one frame with `draw` and submits it.
    pub fn frame<F>(&mut self, draw: F)
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let Some(mut encoder) = self.acquire().ok().flatten() else { return };
        self.encode(&mut encoder, draw);
        self.present(encoder);
    }

    pub fn encode<F>(&self, encoder: &mut wgpu::CommandEncoder, draw: F)
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut target = RenderTarget::new(encoder, &self.view);
        draw(&self.ctx(), &mut target);
    }

    /// Copies `buffer` into a mappable buffer and returns its bytes.
    pub fn read_buffer(&self, buffer: &wgpu::Buffer) -> Vec<u8> {
        let size = buffer.size();
        let staging = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("headless readback"),
            size,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("headless readback"),
            });
        encoder.copy_buffer_to_buffer(buffer, 0, &staging, 0, size);
        self.queue.submit(std::iter::once(encoder.finish()));

        staging.map_async(wgpu::MapMode::Read, .., |r| r.expect("map readback buffer"));
        self.device
            .poll(wgpu::PollType::wait_indefinitely())
            .expect("poll noop device");

        let bytes = staging.get_mapped_range(..).to_vec();
        staging.unmap();
        bytes
    }
}

impl FrameSource for Headless {
    type Frame = wgpu::CommandEncoder;

    fn acquire(&mut self) -> Result<Option<wgpu::CommandEncoder>, wgpu::SurfaceError> {
        if !self.targets.pop_front().unwrap_or(true) {
            return Ok(None);
        }
        Ok(Some(self.device.create_command_encoder(
            &wgpu::CommandEncoderDescriptor {
                label: Some("headless frame"),
            },
        )))
    }

    fn recover(&mut self, err: wgpu::SurfaceError) -> SurfaceErrorAction {
        SurfaceErrorAction::for_error(&err)
    }

    fn present(&mut self, frame: wgpu::CommandEncoder) {
        self.queue.submit(std::iter::once(frame.finish()));
        self.submissions += 1;
    }
}
