//! Error types for the batch resizer.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use serde::Serialize;
use thiserror::Error;

/// Batch-level precondition violations.
///
/// These abort a run before any image is processed.
#[derive(Error, Debug, Serialize)]
pub enum PreconditionError {
    /// The batch contains no images
    #[error("No images selected")]
    EmptyBatch,
    /// Target dimensions are not positive integers
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Main error type for the resizer.
///
/// Per-image failures (`Decode`, `Encode`, `Format`, `Processing`) are
/// recorded in the corresponding [`crate::core::ResizeOutcome`] and never
/// abort a batch; only `Precondition` and `Packaging` surface at batch level.
#[derive(Error, Debug, Serialize)]
pub enum ResizerError {
    /// Batch precondition failed
    #[error("Precondition error: {0}")]
    Precondition(#[from] PreconditionError),

    /// Input bytes could not be decoded as an image
    #[error("Decode error: {0}")]
    Decode(String),

    /// The scaled raster could not be re-encoded
    #[error("Encode error: {0}")]
    Encode(String),

    /// Unsupported or unrecognised image format
    #[error("Format error: {0}")]
    Format(String),

    /// Archive generation or delivery failed
    #[error("Packaging error: {0}")]
    Packaging(String),

    /// Unexpected failure while processing one image
    #[error("Processing error: {0}")]
    Processing(String),
}

/// Convenience result type for resizer operations.
pub type ResizerResult<T> = Result<T, ResizerError>;

// Helper methods for error creation
impl ResizerError {
    pub fn decode<T: Into<String>>(msg: T) -> Self {
        Self::Decode(msg.into())
    }

    pub fn encode<T: Into<String>>(msg: T) -> Self {
        Self::Encode(msg.into())
    }

    pub fn format<T: Into<String>>(msg: T) -> Self {
        Self::Format(msg.into())
    }

    pub fn packaging<T: Into<String>>(msg: T) -> Self {
        Self::Packaging(msg.into())
    }

    pub fn processing<T: Into<String>>(msg: T) -> Self {
        Self::Processing(msg.into())
    }
}

impl PreconditionError {
    pub fn invalid_dimensions(msg: impl Into<String>) -> Self {
        Self::InvalidDimensions(msg.into())
    }
}
