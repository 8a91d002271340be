//! Render pass: scene instances → camera space → canvas
//!
//! One call to `RenderContext::render` clears the canvas, transforms every
//! instance, applies the near-plane policy, projects and rasterizes. There is
//! no depth test; triangles are painted in instance order then triangle order.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::Scene;
use crate::rasterizer::{
    clip_triangle, Camera, Canvas, ClipVertex, Clipped, Color, Point, Projector, Vertex,
};

/// Smallest near distance the pass will use, keeps the divide finite
const MIN_NEAR: f32 = 1e-3;

/// How triangles are rasterized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    Wireframe,
    Filled,
    /// Filled, color scaled by the model's per-vertex intensities
    Shaded,
}

impl RenderMode {
    pub const ALL: [RenderMode; 3] = [RenderMode::Wireframe, RenderMode::Filled, RenderMode::Shaded];

    pub fn label(&self) -> &'static str {
        match self {
            RenderMode::Wireframe => "Wireframe",
            RenderMode::Filled => "Filled",
            RenderMode::Shaded => "Shaded",
        }
    }

    /// Cycle Wireframe → Filled → Shaded → Wireframe
    pub fn next(self) -> RenderMode {
        match self {
            RenderMode::Wireframe => RenderMode::Filled,
            RenderMode::Filled => RenderMode::Shaded,
            RenderMode::Shaded => RenderMode::Wireframe,
        }
    }
}

/// What happens to triangles reaching behind the near plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NearPlane {
    /// Drop the whole triangle if any vertex is behind the plane
    Cull,
    /// Cut the triangle at the plane (may yield two triangles)
    Clip,
}

/// Rasterizer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub mode: RenderMode,
    /// Clear color for every pass
    pub background: Color,
    pub near_plane: NearPlane,
    /// Camera-space depth of the near plane
    pub near_distance: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            mode: RenderMode::Wireframe,
            background: Color::BLACK,
            near_plane: NearPlane::Clip,
            near_distance: 0.1,
        }
    }
}

/// Counters for the last completed pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub instances: usize,
    /// Triangles handed to the rasterizer (after clipping)
    pub triangles_drawn: usize,
    /// Triangles dropped at the near plane
    pub triangles_culled: usize,
    /// Triangles cut by the near plane
    pub triangles_clipped: usize,
}

/// Everything one render pass needs besides the scene and the camera
pub struct RenderContext {
    canvas: Canvas,
    projector: Projector,
    pub settings: RenderSettings,
    stats: FrameStats,
}

impl RenderContext {
    pub fn new(width: usize, height: usize, settings: RenderSettings) -> Self {
        Self {
            canvas: Canvas::new(width, height),
            projector: Projector::for_canvas(width, height),
            settings,
            stats: FrameStats::default(),
        }
    }

    /// Use a custom projector (its canvas size must match the canvas)
    pub fn with_projector(projector: Projector, settings: RenderSettings) -> Self {
        Self {
            canvas: Canvas::new(projector.canvas_width, projector.canvas_height),
            projector,
            settings,
            stats: FrameStats::default(),
        }
    }

    /// The buffer produced by the last pass
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    fn near(&self) -> f32 {
        self.settings.near_distance.max(MIN_NEAR)
    }

    /// Run one full pass and hand back the finished buffer
    pub fn render(&mut self, scene: &Scene, camera: &Camera) -> &Canvas {
        let mut stats = FrameStats::default();
        let near = self.near();
        let view = camera.view();
        let mut camera_space: Vec<Vec3> = Vec::new();

        self.canvas.clear(self.settings.background);

        for (_, instance, model) in scene.instances() {
            stats.instances += 1;

            let to_camera = view * instance.transform.as_matrix();
            camera_space.clear();
            camera_space.extend(model.vertices().iter().map(|&v| to_camera.transform_point3(v)));

            for (t, tri) in model.triangles().iter().enumerate() {
                let corners = tri.indices.map(|i| ClipVertex::new(camera_space[i], model.intensity(i)));

                match self.settings.near_plane {
                    NearPlane::Cull => {
                        if corners.iter().any(|c| !(c.pos.z >= near)) {
                            log::debug!("Culled triangle {} of '{}' at the near plane", t, model.name());
                            stats.triangles_culled += 1;
                            continue;
                        }
                        self.draw_triangle(corners, tri.color);
                        stats.triangles_drawn += 1;
                    }
                    NearPlane::Clip => match clip_triangle(corners, near) {
                        Clipped::Inside(corners) => {
                            self.draw_triangle(corners, tri.color);
                            stats.triangles_drawn += 1;
                        }
                        Clipped::Outside => {
                            log::debug!("Triangle {} of '{}' is behind the near plane", t, model.name());
                            stats.triangles_culled += 1;
                        }
                        Clipped::Split(pieces) => {
                            stats.triangles_clipped += 1;
                            for piece in pieces {
                                self.draw_triangle(piece, tri.color);
                                stats.triangles_drawn += 1;
                            }
                        }
                    },
                }
            }
        }

        log::trace!(
            "Frame: {} instances, {} drawn, {} culled, {} clipped",
            stats.instances,
            stats.triangles_drawn,
            stats.triangles_culled,
            stats.triangles_clipped
        );
        self.stats = stats;
        &self.canvas
    }

    /// Project and rasterize one camera-space triangle in front of the near plane
    fn draw_triangle(&mut self, corners: [ClipVertex; 3], color: Color) {
        let [p0, p1, p2]: [Point; 3] = corners.map(|c| self.projector.project_vertex(c.pos));

        match self.settings.mode {
            RenderMode::Wireframe => self.canvas.draw_wireframe_triangle(p0, p1, p2, color),
            RenderMode::Filled => self.canvas.draw_filled_triangle(p0, p1, p2, color),
            RenderMode::Shaded => self.canvas.draw_shaded_triangle(
                Vertex::from_point(p0, corners[0].h),
                Vertex::from_point(p1, corners[1].h),
                Vertex::from_point(p2, corners[2].h),
                color,
            ),
        }
    }
}
