//! Error type shared by the scene store, scene files and frame export
//!
//! Drawing itself never fails: off-canvas writes and degenerate ranges are
//! handled silently by the rasterizer.

use std::fmt;

/// Everything that can go wrong outside the per-pixel drawing code
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Serialize(ron::Error),
    Image(image::ImageError),
    /// A triangle references a vertex the model does not have
    InvalidTriangle {
        model: String,
        triangle: usize,
        index: usize,
        vertex_count: usize,
    },
    /// Per-vertex intensities present but not one per vertex
    IntensityCount {
        model: String,
        expected: usize,
        found: usize,
    },
    /// Scene file instance names a model that was never declared
    UnknownModel(String),
    /// Handle does not belong to this scene
    UnknownModelId(usize),
    /// Vertex at or behind the near plane (or non-finite depth)
    BehindNearPlane { z: f32 },
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<ron::error::SpannedError> for Error {
    fn from(e: ron::error::SpannedError) -> Self {
        Error::Parse(e)
    }
}

impl From<ron::Error> for Error {
    fn from(e: ron::Error) -> Self {
        Error::Serialize(e)
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::Parse(e) => write!(f, "Parse error: {}", e),
            Error::Serialize(e) => write!(f, "Serialize error: {}", e),
            Error::Image(e) => write!(f, "Image error: {}", e),
            Error::InvalidTriangle { model, triangle, index, vertex_count } => write!(
                f,
                "model '{}': triangle {} references vertex {} but model has {} vertices",
                model, triangle, index, vertex_count
            ),
            Error::IntensityCount { model, expected, found } => write!(
                f,
                "model '{}': expected {} intensities, found {}",
                model, expected, found
            ),
            Error::UnknownModel(name) => write!(f, "unknown model '{}'", name),
            Error::UnknownModelId(id) => write!(f, "unknown model id {}", id),
            Error::BehindNearPlane { z } => write!(f, "vertex behind near plane (z = {})", z),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Parse(e) => Some(e),
            Error::Serialize(e) => Some(e),
            Error::Image(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
