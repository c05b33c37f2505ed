//! Model, view and projection matrices used by the practice programs.

use glam::{Mat4, Vec3};

/// Spins about +Z by `cos(t)` radians and breathes between 0.5x and 1.5x scale.
pub fn pulse(t: f32) -> Mat4 {
    let scale = t.sin() / 2.0 + 1.0;
    Mat4::from_rotation_z(t.cos()) * Mat4::from_scale(Vec3::new(scale, scale, 1.0))
}

/// Places cube number `index` at `position`, tumbling over time.
pub fn cube_model(position: Vec3, index: usize, t: f32) -> Mat4 {
    let angle = (20.0 * index as f32 + 50.0 * t).to_radians();
    let axis = Vec3::new(1.0, 0.3, 0.5).normalize();
    Mat4::from_translation(position) * Mat4::from_axis_angle(axis, angle)
}

/// Fixed camera three units back from the origin.
pub fn initial_view() -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0))
}

pub fn perspective(fov_degrees: f32, aspect_ratio: f32) -> Mat4 {
    Mat4::perspective_rh_gl(fov_degrees.to_radians(), aspect_ratio, 0.1, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn pulse_at_zero_is_a_plain_rotation() {
        let m = pulse(0.0);
        assert!(m.abs_diff_eq(Mat4::from_rotation_z(1.0), 1e-6));
    }

    #[test]
    fn pulse_peaks_at_one_and_a_half() {
        let (scale, _, _) = pulse(FRAC_PI_2).to_scale_rotation_translation();
        assert!((scale.x - 1.5).abs() < 1e-5);
        assert!((scale.y - 1.5).abs() < 1e-5);
        assert!((scale.z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn cube_model_keeps_translation() {
        let position = Vec3::new(2.0, 5.0, -15.0);
        let m = cube_model(position, 3, 1.7);
        assert!(m.transform_point3(Vec3::ZERO).abs_diff_eq(position, 1e-5));
    }

    #[test]
    fn first_cube_starts_unrotated() {
        assert!(cube_model(Vec3::ZERO, 0, 0.0).abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn view_pushes_scene_back() {
        let p = initial_view().transform_point3(Vec3::ZERO);
        assert_eq!(p, Vec3::new(0.0, 0.0, -3.0));
    }

    #[test]
    fn perspective_maps_near_plane_to_minus_one() {
        let p = perspective(45.0, 4.0 / 3.0).project_point3(Vec3::new(0.0, 0.0, -0.1));
        assert!((p.z + 1.0).abs() < 1e-4);
    }
}
