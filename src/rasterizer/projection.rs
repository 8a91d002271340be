//! Perspective projection onto the viewport, then viewport → canvas scaling

use glam::Vec3;

use super::types::Point;
use super::VIEWPORT_DISTANCE;
use crate::error::{Error, Result};

/// Projection plane in camera space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Distance from the eye to the plane
    pub distance: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, distance: f32) -> Self {
        Self { width, height, distance }
    }

    /// Unit-height viewport with the canvas aspect ratio
    pub fn for_canvas(canvas_width: usize, canvas_height: usize) -> Self {
        Self {
            width: canvas_width as f32 / canvas_height as f32,
            height: 1.0,
            distance: VIEWPORT_DISTANCE,
        }
    }
}

/// Maps camera-space points to canvas points
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    pub viewport: Viewport,
    pub canvas_width: usize,
    pub canvas_height: usize,
}

impl Projector {
    pub fn new(viewport: Viewport, canvas_width: usize, canvas_height: usize) -> Self {
        Self { viewport, canvas_width, canvas_height }
    }

    pub fn for_canvas(canvas_width: usize, canvas_height: usize) -> Self {
        Self::new(Viewport::for_canvas(canvas_width, canvas_height), canvas_width, canvas_height)
    }

    /// Scale a viewport coordinate to canvas pixels (truncated).
    /// `as i32` saturates on infinities and maps NaN to 0.
    pub fn viewport_to_canvas(&self, x: f32, y: f32) -> Point {
        Point::new(
            (x * self.canvas_width as f32 / self.viewport.width) as i32,
            (y * self.canvas_height as f32 / self.viewport.height) as i32,
        )
    }

    /// Perspective divide by depth then viewport scaling.
    ///
    /// No validation: `v.z <= 0` gives a mirrored or saturated point. The
    /// render pass only calls this on vertices in front of the near plane.
    pub fn project_vertex(&self, v: Vec3) -> Point {
        let d = self.viewport.distance;
        self.viewport_to_canvas(v.x * d / v.z, v.y * d / v.z)
    }

    /// `project_vertex` for points at or beyond `near`
    pub fn try_project_vertex(&self, v: Vec3, near: f32) -> Result<Point> {
        if !v.z.is_finite() || v.z < near || v.z <= 0.0 {
            return Err(Error::BehindNearPlane { z: v.z });
        }
        Ok(self.project_vertex(v))
    }
}
