use crate::render::{RenderCtx, RenderTarget};

use super::common::{begin_load_pass, create_color_pipeline, create_triangle_vbo};
use super::vertex::TRIANGLE_DRAW;

/// Draws the fixed triangle straight in clip space, no per-frame work.
///
/// GPU objects are created on first use and rebuilt only if the surface
/// format changes.
#[derive(Default)]
pub struct TriangleRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    vertex_buffer: Option<wgpu::Buffer>,
}

impl TriangleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.ensure_pipeline(ctx);
        self.ensure_vertex_buffer(ctx);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(vertex_buffer) = self.vertex_buffer.as_ref() else { return };

        let mut rpass = begin_load_pass(target, "prism triangle pass");
        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, vertex_buffer.slice(..));
        rpass.draw(TRIANGLE_DRAW, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        self.pipeline = Some(create_color_pipeline(
            ctx.device,
            ctx.surface_format,
            "prism triangle pipeline",
            include_str!("shaders/triangle.wgsl"),
            &[],
        ));
        self.pipeline_format = Some(ctx.surface_format);
    }

    fn ensure_vertex_buffer(&mut self, ctx: &RenderCtx<'_>) {
        if self.vertex_buffer.is_none() {
            self.vertex_buffer = Some(create_triangle_vbo(ctx.device, "prism triangle vbo"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FrameLoop, FrameOutcome};
    use crate::render::headless::Headless;
    use crate::render::ColorVertex;

    #[test]
    fn first_frame_uploads_the_triangle_and_builds_the_pipeline() {
        let mut gpu = Headless::new(64, 64);
        let mut r = TriangleRenderer::new();

        gpu.frame(|ctx, target| r.render(ctx, target));

        let vbo = r.vertex_buffer.as_ref().expect("vertex buffer created");
        assert_eq!(vbo.size(), 3 * std::mem::size_of::<ColorVertex>() as u64);
        assert_eq!(r.pipeline_format, Some(gpu.format));
        assert_eq!(gpu.submissions, 1);
    }

    #[test]
    fn later_frames_reuse_gpu_objects() {
        let mut gpu = Headless::new(64, 64);
        let mut r = TriangleRenderer::new();

        gpu.frame(|ctx, target| r.render(ctx, target));
        let pipeline = r.pipeline.clone().expect("pipeline");
        let vbo = r.vertex_buffer.clone().expect("vertex buffer");

        for _ in 0..3 {
            gpu.frame(|ctx, target| r.render(ctx, target));
        }
        assert!(r.pipeline.as_ref() == Some(&pipeline));
        assert!(r.vertex_buffer.as_ref() == Some(&vbo));
        assert_eq!(gpu.submissions, 4);
    }

    #[test]
    fn no_frame_target_means_no_draw() {
        let mut gpu = Headless::new(64, 64).script(&[false]);
        let mut frames = FrameLoop::new();
        let mut r = TriangleRenderer::new();

        let outcome = frames.run(&mut gpu, |gpu, encoder| {
            gpu.encode(encoder, |ctx, target| r.render(ctx, target));
        });

        assert_eq!(outcome, FrameOutcome::Skipped);
        assert_eq!(gpu.submissions, 0);
        assert!(r.pipeline.is_none(), "renderer must not run without a target");
    }
}
