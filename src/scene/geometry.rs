//! Mesh and placement types
//!
//! Pure data with validation at construction. Rendering lives in `render`.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rasterizer::Color;

/// Three vertex indices and one flat color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub indices: [usize; 3],
    pub color: Color,
}

impl Triangle {
    pub fn new(i0: usize, i1: usize, i2: usize, color: Color) -> Self {
        Self { indices: [i0, i1, i2], color }
    }
}

/// Immutable object-space mesh, shared by any number of instances
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    name: String,
    vertices: Vec<Vec3>,
    triangles: Vec<Triangle>,
    /// Per-vertex shading intensity; empty means 1.0 everywhere
    intensities: Vec<f32>,
}

impl Model {
    /// Fails if any triangle references a vertex that does not exist
    pub fn new(name: &str, vertices: Vec<Vec3>, triangles: Vec<Triangle>) -> Result<Self> {
        for (t, tri) in triangles.iter().enumerate() {
            if let Some(&index) = tri.indices.iter().find(|&&i| i >= vertices.len()) {
                return Err(Error::InvalidTriangle {
                    model: name.to_string(),
                    triangle: t,
                    index,
                    vertex_count: vertices.len(),
                });
            }
        }

        Ok(Self {
            name: name.to_string(),
            vertices,
            triangles,
            intensities: Vec::new(),
        })
    }

    /// Attach one intensity per vertex (used by shaded rendering)
    pub fn with_intensities(mut self, intensities: Vec<f32>) -> Result<Self> {
        if !intensities.is_empty() && intensities.len() != self.vertices.len() {
            return Err(Error::IntensityCount {
                model: self.name,
                expected: self.vertices.len(),
                found: intensities.len(),
            });
        }
        self.intensities = intensities;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn intensities(&self) -> &[f32] {
        &self.intensities
    }

    pub fn intensity(&self, vertex: usize) -> f32 {
        self.intensities.get(vertex).copied().unwrap_or(1.0)
    }

    /// Axis-aligned cube of half-size 1 centered on the origin, one color per face
    pub fn cube() -> Self {
        let vertices = vec![
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-1.0, 1.0, 1.0),
            Vec3::new(-1.0, -1.0, 1.0),
            Vec3::new(1.0, -1.0, 1.0),
            Vec3::new(1.0, 1.0, -1.0),
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
        ];
        let triangles = vec![
            Triangle::new(0, 1, 2, Color::RED),
            Triangle::new(0, 2, 3, Color::RED),
            Triangle::new(4, 0, 3, Color::GREEN),
            Triangle::new(4, 3, 7, Color::GREEN),
            Triangle::new(5, 4, 7, Color::BLUE),
            Triangle::new(5, 7, 6, Color::BLUE),
            Triangle::new(1, 5, 6, Color::YELLOW),
            Triangle::new(1, 6, 2, Color::YELLOW),
            Triangle::new(4, 5, 1, Color::PURPLE),
            Triangle::new(4, 1, 0, Color::PURPLE),
            Triangle::new(2, 6, 7, Color::CYAN),
            Triangle::new(2, 7, 3, Color::CYAN),
        ];
        Self {
            name: "cube".to_string(),
            vertices,
            triangles,
            intensities: Vec::new(),
        }
    }
}

/// Scale, then rotate, then translate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self { translation, rotation, scale }
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self { translation, ..Self::IDENTITY }
    }

    /// Object space → world space
    pub fn as_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_index_rejected() {
        let verts = vec![Vec3::ZERO, Vec3::X, Vec3::Y];
        let err = Model::new("bad", verts, vec![Triangle::new(0, 1, 3, Color::RED)]).unwrap_err();
        match err {
            Error::InvalidTriangle { triangle, index, vertex_count, .. } => {
                assert_eq!((triangle, index, vertex_count), (0, 3, 3));
            }
            other => panic!("unexpected error {}", other),
        }
    }

    #[test]
    fn test_intensity_count_checked() {
        let verts = vec![Vec3::ZERO, Vec3::X, Vec3::Y];
        let model = Model::new("tri", verts, vec![Triangle::new(0, 1, 2, Color::RED)]).unwrap();
        assert!(model.intensities().is_empty());
        assert_eq!(model.intensity(2), 1.0);
        assert!(model.clone().with_intensities(vec![0.5]).is_err());
        let shaded = model.with_intensities(vec![0.0, 0.5, 1.0]).unwrap();
        assert_eq!(shaded.intensities(), &[0.0f32, 0.5, 1.0]);
        assert_eq!(shaded.intensity(1), 0.5);
    }

    #[test]
    fn test_cube_indices_valid() {
        let cube = Model::cube();
        assert_eq!(cube.triangles().len(), 12);
        assert!(Model::new("copy", cube.vertices().to_vec(), cube.triangles().to_vec()).is_ok());
    }

    #[test]
    fn test_transform_order_scale_rotate_translate() {
        let t = Transform::new(
            Vec3::new(10.0, 0.0, 0.0),
            Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
            Vec3::new(2.0, 1.0, 1.0),
        );
        // (1,0,0) → scaled (2,0,0) → rotated (0,2,0) → translated (10,2,0)
        let p = t.as_matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::new(10.0, 2.0, 0.0)).length() < 1e-5);
    }
}
