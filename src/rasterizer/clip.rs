//! Near-plane clipping of camera-space triangles
//!
//! Only the `z = near` plane is handled; anything off to the sides is left
//! to `Canvas::put_pixel` to discard.

use glam::Vec3;

/// Camera-space vertex with its shading attribute
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipVertex {
    pub pos: Vec3,
    pub h: f32,
}

impl ClipVertex {
    pub fn new(pos: Vec3, h: f32) -> Self {
        Self { pos, h }
    }

    fn lerp(self, other: ClipVertex, t: f32) -> ClipVertex {
        ClipVertex {
            pos: self.pos + (other.pos - self.pos) * t,
            h: self.h + (other.h - self.h) * t,
        }
    }
}

/// Result of clipping one triangle
#[derive(Debug, Clone, PartialEq)]
pub enum Clipped {
    /// Entirely in front of the plane, unchanged
    Inside([ClipVertex; 3]),
    /// Entirely behind the plane
    Outside,
    /// Straddles the plane: one or two replacement triangles
    Split(Vec<[ClipVertex; 3]>),
}

/// Point where the edge `a → b` crosses `z = near` (`a` and `b` on opposite sides)
fn intersect(a: ClipVertex, b: ClipVertex, near: f32) -> ClipVertex {
    let t = (near - a.pos.z) / (b.pos.z - a.pos.z);
    let mut v = a.lerp(b, t);
    // Pin to the plane exactly; lerp can land a hair behind it
    v.pos.z = near;
    v
}

/// Sutherland–Hodgman against the single plane `z = near`, keeping `z >= near`.
/// Winding order of the input is preserved.
pub fn clip_triangle(tri: [ClipVertex; 3], near: f32) -> Clipped {
    let inside = tri.map(|v| v.pos.z >= near);
    match inside.iter().filter(|&&i| i).count() {
        3 => return Clipped::Inside(tri),
        0 => return Clipped::Outside,
        _ => {}
    }

    let mut polygon: Vec<ClipVertex> = Vec::with_capacity(4);
    for i in 0..3 {
        let current = tri[i];
        let next = tri[(i + 1) % 3];
        let (current_in, next_in) = (inside[i], inside[(i + 1) % 3]);

        if current_in {
            polygon.push(current);
        }
        if current_in != next_in {
            polygon.push(intersect(current, next, near));
        }
    }

    // Fan out from the first vertex: 3 points → 1 triangle, 4 → 2
    let triangles = (1..polygon.len() - 1)
        .map(|i| [polygon[0], polygon[i], polygon[i + 1]])
        .collect();
    Clipped::Split(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32, z: f32) -> ClipVertex {
        ClipVertex::new(Vec3::new(x, y, z), 1.0)
    }

    #[test]
    fn test_fully_inside_untouched() {
        let tri = [v(0.0, 0.0, 5.0), v(1.0, 0.0, 5.0), v(0.0, 1.0, 6.0)];
        assert_eq!(clip_triangle(tri, 0.1), Clipped::Inside(tri));
    }

    #[test]
    fn test_fully_behind_dropped() {
        let tri = [v(0.0, 0.0, -5.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.05)];
        assert_eq!(clip_triangle(tri, 0.1), Clipped::Outside);
    }

    #[test]
    fn test_one_inside_gives_one_triangle() {
        let tri = [v(0.0, 0.0, 2.0), v(1.0, 0.0, -2.0), v(-1.0, 0.0, -2.0)];
        match clip_triangle(tri, 1.0) {
            Clipped::Split(tris) => {
                assert_eq!(tris.len(), 1);
                for p in tris[0] {
                    assert!(p.pos.z >= 1.0);
                }
                // Edge midpoint lands at x = 0.25 when z crosses 1.0
                assert!(tris[0].iter().any(|p| (p.pos.x - 0.25).abs() < 1e-5));
            }
            other => panic!("expected split, got {:?}", other),
        }
    }

    #[test]
    fn test_two_inside_gives_two_triangles() {
        let tri = [v(0.0, 0.0, 2.0), v(1.0, 0.0, 2.0), v(0.0, 1.0, -2.0)];
        match clip_triangle(tri, 1.0) {
            Clipped::Split(tris) => {
                assert_eq!(tris.len(), 2);
                for t in &tris {
                    for p in t {
                        assert!(p.pos.z >= 1.0);
                    }
                }
            }
            other => panic!("expected split, got {:?}", other),
        }
    }

    #[test]
    fn test_attribute_interpolated_at_crossing() {
        let tri = [
            ClipVertex::new(Vec3::new(0.0, 0.0, 3.0), 1.0),
            ClipVertex::new(Vec3::new(0.0, 1.0, 3.0), 1.0),
            ClipVertex::new(Vec3::new(0.0, 0.0, -1.0), 0.0),
        ];
        match clip_triangle(tri, 1.0) {
            Clipped::Split(tris) => {
                let crossing: Vec<_> = tris.iter().flatten().filter(|p| p.pos.z == 1.0).collect();
                assert!(!crossing.is_empty());
                for p in crossing {
                    assert!((p.h - 0.5).abs() < 1e-5);
                }
            }
            other => panic!("expected split, got {:?}", other),
        }
    }
}
