//! Error types for rotopix-transform

use thiserror::Error;

/// Errors that can occur during geometry setup and rotation
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rotopix_core::Error),

    /// Invalid transformation parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Geometry was computed for a different source size
    #[error(
        "geometry computed for {}x{} source, got {}x{} source",
        .geometry.0, .geometry.1, .raster.0, .raster.1
    )]
    GeometryMismatch {
        geometry: (u32, u32),
        raster: (u32, u32),
    },

    /// Canvas side does not fit in a u32
    #[error("canvas for {width}x{height} source is too large")]
    CanvasTooLarge { width: u32, height: u32 },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
