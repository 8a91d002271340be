//! Free-flying camera: eye position plus yaw and pitch (no roll)

use std::f32::consts::TAU;

use glam::{EulerRot, Mat4, Quat, Vec3};

/// Per-frame camera motion produced by whatever reads the input devices
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraDelta {
    /// Added to `position`. The view subtracts the position after rotating,
    /// so this offset is expressed in the camera's own frame.
    pub translation: Vec3,
    /// Radians
    pub yaw: f32,
    /// Radians
    pub pitch: f32,
}

/// Camera state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self { position, yaw: 0.0, pitch: 0.0 }
    }

    /// Radians in (-2π, 2π)
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Stored as `value % 2π`; a negative input keeps its negative residue
    pub fn set_yaw(&mut self, value: f32) {
        self.yaw = value % TAU;
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn set_pitch(&mut self, value: f32) {
        self.pitch = value % TAU;
    }

    pub fn yaw_degrees(&self) -> f32 {
        self.yaw.to_degrees()
    }

    pub fn set_yaw_degrees(&mut self, degrees: f32) {
        self.set_yaw(degrees.to_radians());
    }

    pub fn pitch_degrees(&self) -> f32 {
        self.pitch.to_degrees()
    }

    pub fn set_pitch_degrees(&mut self, degrees: f32) {
        self.set_pitch(degrees.to_radians());
    }

    /// Yaw about +Y after pitch about +X
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// World-space viewing direction
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::Z
    }

    /// World → camera space: inverse rotation first, then the negated
    /// position as a translation.
    pub fn view(&self) -> Mat4 {
        Mat4::from_translation(-self.position) * Mat4::from_quat(self.rotation().inverse())
    }

    pub fn apply(&mut self, delta: CameraDelta) {
        self.position += delta.translation;
        self.set_yaw(self.yaw + delta.yaw);
        self.set_pitch(self.pitch + delta.pitch);
    }
}
