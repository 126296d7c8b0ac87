//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building regression fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Raster construction failed
    #[error("raster error: {0}")]
    Core(#[from] rotopix_core::Error),

    /// Fixture parameters cannot be represented
    #[error("invalid fixture: {0}")]
    Fixture(String),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
