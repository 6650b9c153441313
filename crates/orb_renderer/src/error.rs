//! Error types for render setup and output.

use thiserror::Error;

/// An invalid render or camera parameter, detected at construction time.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Image dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Aspect ratio must be finite and positive, got {0}")]
    InvalidAspectRatio(f64),

    #[error("Sphere radius must be finite and positive, got {0}")]
    InvalidRadius(f64),

    #[error("Samples per pixel must be at least 1")]
    ZeroSamples,

    #[error("Max bounce depth must be at least 1")]
    ZeroDepth,

    #[error("Vertical field of view must be in (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f64),

    #[error("Aperture must be finite and non-negative, got {0}")]
    InvalidAperture(f64),

    #[error("Focus distance must be finite and positive, got {0}")]
    InvalidFocusDistance(f64),

    #[error("Camera look-from and look-at points coincide")]
    DegenerateView,

    #[error("Camera up vector is parallel to the view direction")]
    DegenerateUpVector,
}

/// Errors that can abort a render or its output.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Render cancelled after {rows_done} of {rows_total} rows")]
    Cancelled { rows_done: usize, rows_total: usize },

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}
