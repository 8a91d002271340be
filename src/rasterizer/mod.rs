//! Software rasterizer
//!
//! Features:
//! - Canvas-centered coordinates, y up (raster mapping lives in `Canvas` only)
//! - Lines and triangles built from 1-D interpolation, no error accumulators
//! - Flat and per-vertex intensity shading
//! - Perspective divide onto a fixed-distance viewport
//! - Near-plane cull or clip, no other frustum planes

mod camera;
mod canvas;
mod clip;
mod draw;
mod interpolate;
mod projection;
mod types;

pub use camera::*;
pub use canvas::*;
pub use clip::*;
pub use interpolate::*;
pub use projection::*;
pub use types::*;

/// Default canvas dimensions
pub const WIDTH: usize = 640;
pub const HEIGHT: usize = 640;

/// Distance from the eye to the projection plane
pub const VIEWPORT_DISTANCE: f32 = 1.0;
