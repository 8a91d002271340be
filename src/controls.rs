//! Keyboard → camera motion for the viewer
//!
//! The viewer polls one `KeyState` per frame and keeps the previous one
//! itself; nothing here holds state between frames.

use glam::Vec3;
use macroquad::input::{is_key_down, KeyCode};
use scratch_raster::rasterizer::{Camera, CameraDelta};

/// Units per second
pub const MOVE_SPEED: f32 = 4.0;
/// Radians per second
pub const TURN_SPEED: f32 = 1.5;

/// Snapshot of the keys the viewer cares about
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub look_up: bool,
    pub look_down: bool,
    pub cycle_mode: bool,
    pub screenshot: bool,
    pub open_scene: bool,
    pub quit: bool,
}

impl KeyState {
    pub fn poll() -> Self {
        Self {
            forward: is_key_down(KeyCode::W),
            back: is_key_down(KeyCode::S),
            left: is_key_down(KeyCode::A),
            right: is_key_down(KeyCode::D),
            up: is_key_down(KeyCode::E),
            down: is_key_down(KeyCode::Q),
            turn_left: is_key_down(KeyCode::Left),
            turn_right: is_key_down(KeyCode::Right),
            look_up: is_key_down(KeyCode::Up),
            look_down: is_key_down(KeyCode::Down),
            cycle_mode: is_key_down(KeyCode::M),
            screenshot: is_key_down(KeyCode::P),
            open_scene: is_key_down(KeyCode::O),
            quit: is_key_down(KeyCode::Escape),
        }
    }

    /// Keys that went down since `previous`
    pub fn pressed_since(&self, previous: &KeyState) -> KeyState {
        KeyState {
            forward: self.forward && !previous.forward,
            back: self.back && !previous.back,
            left: self.left && !previous.left,
            right: self.right && !previous.right,
            up: self.up && !previous.up,
            down: self.down && !previous.down,
            turn_left: self.turn_left && !previous.turn_left,
            turn_right: self.turn_right && !previous.turn_right,
            look_up: self.look_up && !previous.look_up,
            look_down: self.look_down && !previous.look_down,
            cycle_mode: self.cycle_mode && !previous.cycle_mode,
            screenshot: self.screenshot && !previous.screenshot,
            open_scene: self.open_scene && !previous.open_scene,
            quit: self.quit && !previous.quit,
        }
    }
}

fn axis(positive: bool, negative: bool) -> f32 {
    (positive as i32 - negative as i32) as f32
}

/// Motion for one frame of `dt` seconds with `keys` held.
///
/// Translation is in the camera frame (forward is +Z wherever the camera
/// looks); positive pitch tilts the view down, so "look up" subtracts.
pub fn camera_delta(keys: &KeyState, dt: f32) -> CameraDelta {
    let local = Vec3::new(
        axis(keys.right, keys.left),
        axis(keys.up, keys.down),
        axis(keys.forward, keys.back),
    );

    CameraDelta {
        translation: local.normalize_or_zero() * MOVE_SPEED * dt,
        yaw: axis(keys.turn_right, keys.turn_left) * TURN_SPEED * dt,
        pitch: axis(keys.look_down, keys.look_up) * TURN_SPEED * dt,
    }
}

/// Convenience: apply one frame of input to `camera`
pub fn drive(camera: &mut Camera, keys: &KeyState, dt: f32) {
    let delta = camera_delta(keys, dt);
    if delta != CameraDelta::default() {
        camera.apply(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_is_zero() {
        assert_eq!(camera_delta(&KeyState::default(), 0.016), CameraDelta::default());
    }

    #[test]
    fn test_forward_moves_toward_what_camera_sees() {
        let mut camera = Camera::default();
        camera.set_yaw_degrees(45.0);
        let ahead = camera.rotation() * Vec3::new(0.0, 0.0, 10.0);

        let keys = KeyState { forward: true, ..Default::default() };
        drive(&mut camera, &keys, 0.5);

        let p = camera.view().transform_point3(ahead);
        assert!((p - Vec3::new(0.0, 0.0, 10.0 - MOVE_SPEED * 0.5)).length() < 1e-4);
    }

    #[test]
    fn test_diagonal_not_faster() {
        let keys = KeyState { forward: true, right: true, ..Default::default() };
        let d = camera_delta(&keys, 1.0);
        assert!((d.translation.length() - MOVE_SPEED).abs() < 1e-5);
    }

    #[test]
    fn test_turn_and_look() {
        let keys = KeyState { turn_right: true, look_up: true, ..Default::default() };
        let d = camera_delta(&keys, 2.0);
        assert_eq!(d.yaw, TURN_SPEED * 2.0);
        assert_eq!(d.pitch, -TURN_SPEED * 2.0);
    }

    #[test]
    fn test_pressed_is_edge_triggered() {
        let held = KeyState { cycle_mode: true, ..Default::default() };
        assert!(held.pressed_since(&KeyState::default()).cycle_mode);
        assert!(!held.pressed_since(&held).cycle_mode);
    }
}
