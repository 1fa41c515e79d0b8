use glam::{Mat4, Vec3, Vec4};

/// Non-uniform scale matrix.
#[inline]
pub fn scale_matrix(scale: Vec3) -> Mat4 {
    Mat4::from_scale(scale)
}

/// Rotation about +Y by `radians`.
///
/// Columns: `(c, 0, -s, 0) (0, 1, 0, 0) (s, 0, c, 0) (0, 0, 0, 1)`.
pub fn rotation_y(radians: f32) -> Mat4 {
    let (s, c) = radians.sin_cos();
    Mat4::from_cols(
        Vec4::new(c, 0.0, -s, 0.0),
        Vec4::new(0.0, 1.0, 0.0, 0.0),
        Vec4::new(s, 0.0, c, 0.0),
        Vec4::W,
    )
}

/// Model matrix: `scale * rotation_y`.
///
/// Applied to a column vector the rotation happens first, then the scale.
#[inline]
pub fn model_matrix(scale: Vec3, radians: f32) -> Mat4 {
    scale_matrix(scale) * rotation_y(radians)
}

/// Fixed camera: pushes the scene `distance` units along +Z (into the screen).
#[inline]
pub fn view_matrix(distance: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, distance))
}

/// Left-handed perspective projection with `0..1` depth.
///
/// `fov_y` is the vertical field of view in radians. A view-space point at
/// `z = near` lands on depth 0, one at `z = far` on depth 1.
pub fn perspective_projection(fov_y: f32, near: f32, far: f32, aspect: f32) -> Mat4 {
    let y = 1.0 / (fov_y * 0.5).tan();
    let x = y / aspect;
    let z = far / (far - near);

    Mat4::from_cols(
        Vec4::new(x, 0.0, 0.0, 0.0),
        Vec4::new(0.0, y, 0.0, 0.0),
        Vec4::new(0.0, 0.0, z, 1.0),
        Vec4::new(0.0, 0.0, z * -near, 0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat3;

    const EPS: f32 = 1e-5;
    const SCALE: Vec3 = Vec3::new(50.0, 50.0, 1.0);

    fn depth_of(proj: Mat4, view_z: f32) -> f32 {
        let clip = proj * Vec4::new(0.0, 0.0, view_z, 1.0);
        clip.z / clip.w
    }

    // ── rotation ──────────────────────────────────────────────────────────

    #[test]
    fn rotation_y_matches_glam() {
        for deg in [0.0f32, 30.0, 90.0, 181.0, 359.0] {
            let r = deg.to_radians();
            assert!(rotation_y(r).abs_diff_eq(Mat4::from_rotation_y(r), EPS), "angle {deg}");
        }
    }

    #[test]
    fn rotation_y_keeps_y_axis_fixed() {
        let v = rotation_y(1.234) * Vec4::new(0.0, 1.0, 0.0, 0.0);
        assert!(v.abs_diff_eq(Vec4::new(0.0, 1.0, 0.0, 0.0), EPS));
    }

    // ── model ─────────────────────────────────────────────────────────────

    #[test]
    fn model_determinant_is_scale_volume_for_every_angle() {
        let expected = SCALE.x * SCALE.y * SCALE.z;
        for deg in 0..360u32 {
            let m = model_matrix(SCALE, (deg as f32).to_radians());
            let det = m.determinant();
            assert!(
                (det - expected).abs() <= expected * 1e-5,
                "angle {deg}: det {det} != {expected}"
            );
        }
    }

    #[test]
    fn model_rotation_block_is_orthonormal_once_scale_is_removed() {
        let unscale = scale_matrix(SCALE).inverse();
        for deg in 0..360u32 {
            let r = Mat3::from_mat4(unscale * model_matrix(SCALE, (deg as f32).to_radians()));
            for (i, a) in [r.x_axis, r.y_axis, r.z_axis].iter().enumerate() {
                assert!((a.length() - 1.0).abs() < EPS, "angle {deg}: column {i} not unit");
            }
            assert!(r.x_axis.dot(r.y_axis).abs() < EPS);
            assert!(r.x_axis.dot(r.z_axis).abs() < EPS);
            assert!(r.y_axis.dot(r.z_axis).abs() < EPS);
            assert!((r.determinant() - 1.0).abs() < EPS, "angle {deg}: reflection");
        }
    }

    #[test]
    fn model_rotates_before_scaling() {
        // +X rotated 90° about Y points at -Z; the unit z scale leaves it there.
        let m = model_matrix(SCALE, 90f32.to_radians());
        let v = m * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!(v.abs_diff_eq(Vec4::new(0.0, 0.0, -1.0, 1.0), EPS));

        // Scale-then-rotate would have produced -50 on Z.
        let wrong = rotation_y(90f32.to_radians()) * scale_matrix(SCALE);
        assert!(!(wrong * Vec4::new(1.0, 0.0, 0.0, 1.0)).abs_diff_eq(v, EPS));
    }

    #[test]
    fn model_at_zero_degrees_is_pure_scale() {
        assert!(model_matrix(SCALE, 0.0).abs_diff_eq(scale_matrix(SCALE), EPS));
    }

    // ── view ──────────────────────────────────────────────────────────────

    #[test]
    fn view_pushes_origin_along_z() {
        let p = view_matrix(110.0) * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(p, Vec4::new(0.0, 0.0, 110.0, 1.0));
    }

    #[test]
    fn view_leaves_directions_untouched() {
        let d = view_matrix(110.0) * Vec4::new(1.0, 2.0, 3.0, 0.0);
        assert_eq!(d, Vec4::new(1.0, 2.0, 3.0, 0.0));
    }

    // ── projection ────────────────────────────────────────────────────────

    #[test]
    fn projection_maps_near_plane_to_zero_depth() {
        let proj = perspective_projection(45f32.to_radians(), 0.001, 1000.0, 1.0);
        assert!(depth_of(proj, 0.001).abs() < EPS);
    }

    #[test]
    fn projection_maps_far_plane_to_unit_depth() {
        let proj = perspective_projection(45f32.to_radians(), 0.001, 1000.0, 1.0);
        assert!((depth_of(proj, 1000.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn projection_depth_is_monotonic_between_planes() {
        let proj = perspective_projection(45f32.to_radians(), 0.001, 1000.0, 1.0);
        let mut prev = depth_of(proj, 0.001);
        for z in [0.01f32, 1.0, 10.0, 110.0, 500.0, 1000.0] {
            let d = depth_of(proj, z);
            assert!(d > prev, "depth must increase with distance (z = {z})");
            assert!((0.0..=1.0 + EPS).contains(&d));
            prev = d;
        }
    }

    #[test]
    fn projection_matches_glam_left_handed_perspective() {
        let fov = 45f32.to_radians();
        for aspect in [1.0f32, 16.0 / 9.0, 0.5] {
            let ours = perspective_projection(fov, 0.001, 1000.0, aspect);
            let glam = Mat4::perspective_lh(fov, aspect, 0.001, 1000.0);
            assert!(ours.abs_diff_eq(glam, EPS), "aspect {aspect}");
        }
    }

    #[test]
    fn projection_divides_x_focal_length_by_aspect() {
        let proj = perspective_projection(45f32.to_radians(), 0.001, 1000.0, 2.0);
        let y = 1.0 / (22.5f32).to_radians().tan();
        assert!((proj.y_axis.y - y).abs() < EPS);
        assert!((proj.x_axis.x - y / 2.0).abs() < EPS);
    }
}
