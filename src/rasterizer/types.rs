//! Core value types for the rasterizer

use serde::{Deserialize, Serialize};

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0, a: 255 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0, a: 255 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255, a: 255 };
    pub const YELLOW: Color = Color { r: 255, g: 255, b: 0, a: 255 };
    pub const PURPLE: Color = Color { r: 128, g: 0, b: 128, a: 255 };
    pub const CYAN: Color = Color { r: 0, g: 255, b: 255, a: 255 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Multiply RGB by `factor`, saturating each channel to 0-255.
    /// Alpha is left alone.
    pub fn scale(self, factor: f32) -> Self {
        let channel = |c: u8| (c as f32 * factor).clamp(0.0, 255.0) as u8;
        Self {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
            a: self.a,
        }
    }

    /// Pack as `R | G<<8 | B<<16 | A<<24` (little-endian bytes are RGBA)
    pub fn to_packed(self) -> u32 {
        u32::from_le_bytes(self.to_bytes())
    }

    pub fn from_packed(packed: u32) -> Self {
        let [r, g, b, a] = packed.to_le_bytes();
        Self { r, g, b, a }
    }

    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Integer point in canvas space (origin at center, y up)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Canvas point carrying a scalar attribute `h` (shading intensity)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
    pub h: f32,
}

impl Vertex {
    pub fn new(x: i32, y: i32, h: f32) -> Self {
        Self { x, y, h }
    }

    pub fn from_point(p: Point, h: f32) -> Self {
        Self { x: p.x, y: p.y, h }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_halves_rgb_keeps_alpha() {
        let c = Color::with_alpha(200, 100, 51, 128).scale(0.5);
        assert_eq!(c, Color::with_alpha(100, 50, 25, 128));
    }

    #[test]
    fn test_scale_saturates() {
        assert_eq!(Color::new(200, 10, 0).scale(2.0), Color::new(255, 20, 0));
        assert_eq!(Color::new(200, 10, 0).scale(-1.0), Color::new(0, 0, 0));
    }

    #[test]
    fn test_packed_byte_order() {
        let c = Color::with_alpha(1, 2, 3, 4);
        assert_eq!(c.to_packed(), 0x0403_0201);
        assert_eq!(Color::from_packed(c.to_packed()), c);
    }
}
