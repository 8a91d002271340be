//! Scratch Raster: a software 3D rasterizer built from first principles
//!
//! - Centered canvas with silent clipping of off-screen writes
//! - Integer and float linear interpolation
//! - Dominant-axis lines, wireframe / flat / shaded triangles
//! - Perspective projection onto a viewport, free-flying yaw/pitch camera
//! - Scene of shared models placed by per-instance transforms
//! - No depth buffer: triangles are painted in list order

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod rasterizer;
pub mod scene;

pub use error::{Error, Result};
