use std::collections::HashSet;

use glam::Vec2;
use sdl2::{keyboard::Keycode, mouse::MouseButton};

/// The current state of the keyboard.
#[derive(Default)]
pub struct KeyboardState {
    pub down: HashSet<Keycode>,
    pub pressed: HashSet<Keycode>,
    pub released: HashSet<Keycode>,
}

impl KeyboardState {
    /// Clears the keys pressed or released during the previous frame.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }

    pub fn key_down(&mut self, key: Keycode) {
        if self.down.insert(key) {
            self.pressed.insert(key);
        }
    }

    pub fn key_up(&mut self, key: Keycode) {
        if self.down.remove(&key) {
            self.released.insert(key);
        }
    }

    pub fn is_down(&self, key: Keycode) -> bool {
        self.down.contains(&key)
    }

    /// `1.0` while only `positive` is held, `-1.0` for only `negative`, else `0.0`.
    pub fn axis(&self, positive: Keycode, negative: Keycode) -> f32 {
        (self.is_down(positive) as i32 - self.is_down(negative) as i32) as f32
    }
}

/// The current state of the mouse.
#[derive(Default)]
pub struct MouseState {
    pub position: Vec2,
    pub delta: Vec2,
    pub down: HashSet<MouseButton>,
    pub pressed: HashSet<MouseButton>,
    pub released: HashSet<MouseButton>,
    pub scroll_delta: Vec2,
}

impl MouseState {
    /// Resets per-frame deltas and button edges.
    pub fn begin_frame(&mut self) {
        self.delta = Vec2::ZERO;
        self.scroll_delta = Vec2::ZERO;
        self.pressed.clear();
        self.released.clear();
    }

    /// Records a motion event. Several events in one frame accumulate.
    pub fn motion(&mut self, position: Vec2, relative: Vec2) {
        self.position = position;
        self.delta += relative;
    }

    pub fn scroll(&mut self, amount: Vec2) {
        self.scroll_delta += amount;
    }

    pub fn button_down(&mut self, button: MouseButton) {
        self.down.insert(button);
        self.pressed.insert(button);
    }

    pub fn button_up(&mut self, button: MouseButton) {
        self.down.remove(&button);
        self.released.insert(button);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_edges_last_one_frame() {
        let mut keyboard = KeyboardState::default();
        keyboard.key_down(Keycode::W);
        assert!(keyboard.is_down(Keycode::W));
        assert!(keyboard.pressed.contains(&Keycode::W));

        keyboard.begin_frame();
        assert!(keyboard.is_down(Keycode::W));
        assert!(keyboard.pressed.is_empty());

        keyboard.key_up(Keycode::W);
        assert!(!keyboard.is_down(Keycode::W));
        assert!(keyboard.released.contains(&Keycode::W));
    }

    #[test]
    fn held_key_does_not_repress() {
        let mut keyboard = KeyboardState::default();
        keyboard.key_down(Keycode::A);
        keyboard.begin_frame();
        keyboard.key_down(Keycode::A);
        assert!(keyboard.pressed.is_empty());
    }

    #[test]
    fn axis_cancels_opposing_keys() {
        let mut keyboard = KeyboardState::default();
        assert_eq!(keyboard.axis(Keycode::W, Keycode::S), 0.0);
        keyboard.key_down(Keycode::W);
        assert_eq!(keyboard.axis(Keycode::W, Keycode::S), 1.0);
        keyboard.key_down(Keycode::S);
        assert_eq!(keyboard.axis(Keycode::W, Keycode::S), 0.0);
        keyboard.key_up(Keycode::W);
        assert_eq!(keyboard.axis(Keycode::W, Keycode::S), -1.0);
    }

    #[test]
    fn mouse_motion_accumulates_within_a_frame() {
        let mut mouse = MouseState::default();
        mouse.motion(Vec2::new(10.0, 10.0), Vec2::new(2.0, -1.0));
        mouse.motion(Vec2::new(13.0, 9.0), Vec2::new(3.0, -1.0));
        assert_eq!(mouse.position, Vec2::new(13.0, 9.0));
        assert_eq!(mouse.delta, Vec2::new(5.0, -2.0));

        mouse.begin_frame();
        assert_eq!(mouse.delta, Vec2::ZERO);
        assert_eq!(mouse.position, Vec2::new(13.0, 9.0));
    }

    #[test]
    fn mouse_buttons() {
        let mut mouse = MouseState::default();
        mouse.button_down(MouseButton::Left);
        mouse.scroll(Vec2::new(0.0, 1.0));
        assert!(mouse.down.contains(&MouseButton::Left));
        assert_eq!(mouse.scroll_delta.y, 1.0);
        mouse.begin_frame();
        mouse.button_up(MouseButton::Left);
        assert!(mouse.down.is_empty());
        assert!(mouse.released.contains(&MouseButton::Left));
        assert_eq!(mouse.scroll_delta, Vec2::ZERO);
    }
}
