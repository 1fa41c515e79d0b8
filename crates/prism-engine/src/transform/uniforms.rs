use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use super::angle::AngleCounter;
use super::matrices::{model_matrix, perspective_projection, view_matrix};

/// Uniform record consumed by the transform shader (group 0, binding 0).
///
/// Matrices are column-major, matching WGSL `mat4x4<f32>`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Uniforms {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl Uniforms {
    pub fn new(model: Mat4, view: Mat4, projection: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
        }
    }

    #[inline]
    pub fn model(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model)
    }

    #[inline]
    pub fn view(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.view)
    }

    #[inline]
    pub fn projection(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.projection)
    }
}

/// Fixed parameters of the spinning-triangle transform.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransformConfig {
    /// Per-axis model scale.
    pub scale: Vec3,

    /// Distance the view pushes the model away from the camera.
    pub camera_distance: f32,

    /// Vertical field of view, degrees.
    pub fov_y_degrees: f32,

    pub near: f32,
    pub far: f32,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            scale: Vec3::new(50.0, 50.0, 1.0),
            camera_distance: 110.0,
            fov_y_degrees: 45.0,
            near: 0.001,
            far: 1000.0,
        }
    }
}

/// Per-frame transform state: config plus the rotation counter.
#[derive(Debug, Clone, Default)]
pub struct Transform {
    config: TransformConfig,
    angle: AngleCounter,
}

impl Transform {
    pub fn new(config: TransformConfig) -> Self {
        Self {
            config,
            angle: AngleCounter::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    #[inline]
    pub fn angle(&self) -> AngleCounter {
        self.angle
    }

    /// Builds the uniforms for the current angle without advancing it.
    ///
    /// A zero or non-finite `aspect` falls back to 1.0.
    pub fn uniforms(&self, aspect: f32) -> Uniforms {
        let aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };
        let c = &self.config;

        Uniforms::new(
            model_matrix(c.scale, self.angle.radians()),
            view_matrix(c.camera_distance),
            perspective_projection(c.fov_y_degrees.to_radians(), c.near, c.far, aspect),
        )
    }

    /// Advances the rotation one degree and returns that frame's uniforms.
    pub fn next_uniforms(&mut self, aspect: f32) -> Uniforms {
        self.angle.advance();
        self.uniforms(aspect)
    }
}
