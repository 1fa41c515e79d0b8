use crate::render::{RenderCtx, RenderTarget};
use crate::transform::{Transform, TransformConfig, Uniforms};

use super::common::{
    begin_load_pass, create_color_pipeline, create_triangle_vbo, uniforms_min_binding_size,
};
use super::vertex::TRIANGLE_DRAW;

/// Draws the triangle through a model/view/projection transform.
///
/// Every call advances the rotation by one degree and rewrites the uniform
/// buffer before the draw, so rotation speed follows the frame rate.
#[derive(Default)]
pub struct TransformRenderer {
    transform: Transform,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    uniform_buffer: Option<wgpu::Buffer>,

    vertex_buffer: Option<wgpu::Buffer>,
}

impl TransformRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TransformConfig) -> Self {
        Self {
            transform: Transform::new(config),
            ..Self::default()
        }
    }

    /// Rotation state and fixed camera parameters.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        if self.vertex_buffer.is_none() {
            self.vertex_buffer = Some(create_triangle_vbo(ctx.device, "prism transform vbo"));
        }

        let uniforms = self.transform.next_uniforms(ctx.viewport.aspect_ratio());
        self.write_uniforms(ctx, &uniforms);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vertex_buffer) = self.vertex_buffer.as_ref() else { return };

        let mut rpass = begin_load_pass(target, "prism transform pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vertex_buffer.slice(..));
        rpass.draw(TRIANGLE_DRAW, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("prism transform bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: uniforms_min_binding_size(),
                        },
                        count: None,
                    }],
                });

        let pipeline = create_color_pipeline(
            ctx.device,
            ctx.surface_format,
            "prism transform pipeline",
            include_str!("shaders/transform.wgsl"),
            &[&bind_group_layout],
        );

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        // Bindings belong to the old layout.
        self.bind_group = None;
        self.uniform_buffer = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.uniform_buffer.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        // Tests read the buffer back through `Headless::read_buffer`, which
        // copies out of it.
        #[cfg(test)]
        let readback = wgpu::BufferUsages::COPY_SRC;
        #[cfg(not(test))]
        let readback = wgpu::BufferUsages::empty();

        let uniform_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("prism transform ubo"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST | readback,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("prism transform bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        self.uniform_buffer = Some(uniform_buffer);
        self.bind_group = Some(bind_group);
    }

    fn write_uniforms(&self, ctx: &RenderCtx<'_>, uniforms: &Uniforms) {
        let Some(ubo) = self.uniform_buffer.as_ref() else { return };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(uniforms));
    }
}
