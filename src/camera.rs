//! A first-person camera driven by yaw and pitch angles in degrees.

use glam::{Mat4, Vec3};

pub const YAW: f32 = -90.0;
pub const PITCH: f32 = 0.0;
pub const SPEED: f32 = 2.5;
pub const SENSITIVITY: f32 = 0.1;
pub const ZOOM: f32 = 45.0;

const PITCH_LIMIT: f32 = 89.0;
const MIN_ZOOM: f32 = 1.0;
const MAX_ZOOM: f32 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub front: Vec3,
    pub up: Vec3,
    pub right: Vec3,
    pub world_up: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub speed: f32,
    pub sensitivity: f32,
    pub zoom: f32,
    /// Keeps movement on the XZ plane, whatever the pitch.
    pub grounded: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0))
    }
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up: Vec3::Y,
            yaw: YAW,
            pitch: PITCH,
            speed: SPEED,
            sensitivity: SENSITIVITY,
            zoom: ZOOM,
            grounded: false,
        };
        camera.update_vectors();
        camera
    }

    pub fn grounded(mut self) -> Self {
        self.grounded = true;
        self
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.zoom.to_radians(), aspect_ratio, 0.1, 100.0)
    }

    /// Moves the camera `speed * delta_time` units in the given direction.
    pub fn process_keyboard(&mut self, direction: Movement, delta_time: f32) {
        let velocity = self.speed * delta_time;
        let (front, right) = if self.grounded {
            (
                self.front.with_y(0.0).normalize_or_zero(),
                self.right.with_y(0.0).normalize_or_zero(),
            )
        } else {
            (self.front, self.right)
        };
        match direction {
            Movement::Forward => self.position += front * velocity,
            Movement::Backward => self.position -= front * velocity,
            Movement::Left => self.position -= right * velocity,
            Movement::Right => self.position += right * velocity,
        }
    }

    /// Turns the camera. `y_offset` is positive when the mouse moves up.
    pub fn process_mouse(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.sensitivity;
        self.pitch += y_offset * self.sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    pub fn process_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    fn update_vectors(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        a.abs_diff_eq(b, 1e-5)
    }

    #[test]
    fn starts_looking_down_negative_z() {
        let camera = Camera::default();
        assert!(approx(camera.front, Vec3::NEG_Z));
        assert!(approx(camera.right, Vec3::X));
        assert!(approx(camera.up, Vec3::Y));
    }

    #[test]
    fn movement_scales_with_delta_time() {
        let mut camera = Camera::default();
        camera.process_keyboard(Movement::Forward, 0.5);
        assert!(approx(camera.position, Vec3::new(0.0, 0.0, 3.0 - 1.25)));
        camera.process_keyboard(Movement::Right, 1.0);
        assert!(approx(camera.position, Vec3::new(2.5, 0.0, 1.75)));
        camera.process_keyboard(Movement::Left, 1.0);
        camera.process_keyboard(Movement::Backward, 0.5);
        assert!(approx(camera.position, Vec3::new(0.0, 0.0, 3.0)));
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = Camera::default();
        camera.process_mouse(0.0, 10_000.0, true);
        assert_eq!(camera.pitch, 89.0);
        camera.process_mouse(0.0, -20_000.0, true);
        assert_eq!(camera.pitch, -89.0);
    }

    #[test]
    fn unconstrained_pitch_is_free() {
        let mut camera = Camera::default();
        camera.process_mouse(0.0, 1000.0, false);
        assert_eq!(camera.pitch, 100.0);
    }

    #[test]
    fn yaw_turns_right() {
        let mut camera = Camera::default();
        // 900 px at 0.1 deg/px is a quarter turn.
        camera.process_mouse(900.0, 0.0, true);
        assert!(approx(camera.front, Vec3::X));
    }

    #[test]
    fn grounded_movement_keeps_height() {
        let mut camera = Camera::default().grounded();
        camera.process_mouse(0.0, 450.0, true);
        camera.process_keyboard(Movement::Forward, 1.0);
        assert!(camera.position.y.abs() < 1e-6);
        assert!(approx(camera.position, Vec3::new(0.0, 0.0, 0.5)));
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = Camera::default();
        camera.process_scroll(-5.0);
        assert_eq!(camera.zoom, 45.0);
        camera.process_scroll(10.0);
        assert_eq!(camera.zoom, 35.0);
        camera.process_scroll(100.0);
        assert_eq!(camera.zoom, 1.0);
    }

    #[test]
    fn view_matrix_moves_world_opposite_to_camera() {
        let camera = Camera::default();
        let origin = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert!(approx(origin, Vec3::new(0.0, 0.0, -3.0)));
    }
}
