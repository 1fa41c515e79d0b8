use bytemuck::{Pod, Zeroable};

/// Interleaved position + color vertex: six `f32`s, stride 24 bytes.
///
/// Layout must match the shader inputs:
/// - `@location(0) position: vec3<f32>` at offset 0
/// - `@location(1) color: vec3<f32>` at offset 12
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl ColorVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // color
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ColorVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[rustfmt::skip]
pub const TRIANGLE_VERTICES: [ColorVertex; 3] = [
    //                        x     y    z               r    g    b
    ColorVertex { position: [-0.8,  0.4, 0.0], color: [1.0, 0.0, 0.0] },
    ColorVertex { position: [ 0.4, -0.8, 0.0], color: [0.0, 1.0, 0.0] },
    ColorVertex { position: [ 0.8,  0.8, 0.0], color: [0.0, 0.0, 1.0] },
];

/// Vertex range of the single triangle draw.
pub const TRIANGLE_DRAW: std::ops::Range<u32> = 0..TRIANGLE_VERTICES.len() as u32;
