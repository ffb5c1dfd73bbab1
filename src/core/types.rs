//! Core types for the resize data model.

use serde::{Deserialize, Serialize};

/// A user-selected image, as handed over by the host's file picker.
///
/// Immutable after construction; consumed by a batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceImage {
    /// Original filename as reported by the host
    pub name: String,
    /// Raw encoded image bytes
    pub bytes: Vec<u8>,
    /// MIME type reported by the host (e.g. "image/jpeg")
    pub mime_type: String,
}

impl SourceImage {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bytes,
            mime_type: mime_type.into(),
        }
    }
}

/// Resize configuration shared across one whole batch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeRequest {
    /// Target width in pixels
    pub target_width: u32,
    /// Target height in pixels; ignored when the aspect ratio is preserved
    pub target_height: u32,
    /// When true, output height is derived from the target width and the
    /// source's intrinsic aspect ratio
    pub preserve_aspect_ratio: bool,
}

impl Default for ResizeRequest {
    fn default() -> Self {
        Self {
            target_width: 800,
            target_height: 600,
            preserve_aspect_ratio: true,
        }
    }
}

/// Result of processing one source image.
///
/// Never mutated after creation. The encoded payload is deliberately not
/// serialized; it travels to the host inside the archive.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeOutcome {
    /// Name of the source image this outcome belongs to
    pub source_name: String,
    /// Derived archive entry name, present on success
    pub output_name: Option<String>,
    /// Whether the resize succeeded
    pub success: bool,
    /// Resized, re-encoded image bytes
    #[serde(skip_serializing)]
    pub encoded_bytes: Option<Vec<u8>>,
    /// Error message if the resize failed
    pub error: Option<String>,
}

impl ResizeOutcome {
    pub fn succeeded(
        source_name: impl Into<String>,
        output_name: impl Into<String>,
        encoded_bytes: Vec<u8>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            output_name: Some(output_name.into()),
            success: true,
            encoded_bytes: Some(encoded_bytes),
            error: None,
        }
    }

    pub fn failed(source_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            output_name: None,
            success: false,
            encoded_bytes: None,
            error: Some(error.into()),
        }
    }
}

/// The per-image outcomes of one batch run, in input order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub outcomes: Vec<ResizeOutcome>,
}

impl BatchResult {
    pub fn new(outcomes: Vec<ResizeOutcome>) -> Self {
        Self { outcomes }
    }

    /// Number of images that resized successfully.
    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }

    /// Number of images submitted to the run.
    pub fn total_count(&self) -> usize {
        self.outcomes.len()
    }

    /// The successful outcomes, input order preserved.
    pub fn successes(&self) -> impl Iterator<Item = &ResizeOutcome> {
        self.outcomes.iter().filter(|o| o.success)
    }
}
