//! Batch orchestration: strictly sequential per-image processing.

use tokio::task;
use tracing::{debug, info, warn};

use crate::core::{BatchResult, Progress, ResizeOutcome, ResizeRequest, SourceImage};
use crate::processing::resize::resize;
use crate::processing::validation::validate_batch;
use crate::utils::{derive_output_name, ResizerResult};

/// Drives one batch of images through the resize engine.
///
/// Processing is strictly sequential in input order: image N+1 does not
/// start until image N's outcome is recorded, which keeps progress values
/// monotonic and the outcome order deterministic.
pub struct BatchOrchestrator {
    request: ResizeRequest,
}

impl BatchOrchestrator {
    pub fn new(request: ResizeRequest) -> Self {
        Self { request }
    }

    /// Processes `images` sequentially, invoking `progress` after each one.
    ///
    /// A single image's failure is recorded in its outcome and never aborts
    /// the batch; precondition violations abort before any image is touched.
    pub async fn run(
        &self,
        images: Vec<SourceImage>,
        mut progress: impl FnMut(Progress),
    ) -> ResizerResult<BatchResult> {
        validate_batch(&images, &self.request)?;

        let total = images.len();
        info!("Processing batch of {} images", total);

        let mut outcomes = Vec::with_capacity(total);

        for (idx, image) in images.into_iter().enumerate() {
            let completed = idx + 1;
            let source_name = image.name.clone();
            let request = self.request;

            // Each resize runs on the blocking pool; awaiting the handle
            // before touching the next image keeps the sequencing strict.
            let outcome = match task::spawn_blocking(move || resize_single(image, &request)).await {
                Ok(outcome) => outcome,
                // A panic inside one image's processing is still a per-image failure.
                Err(e) => ResizeOutcome::failed(
                    source_name.as_str(),
                    format!("Image processing panicked: {}", e),
                ),
            };

            if let Some(error) = &outcome.error {
                warn!("Resize failed for '{}': {}", source_name, error);
            }

            outcomes.push(outcome);
            progress(Progress::new(completed, total));
        }

        let result = BatchResult::new(outcomes);
        if result.success_count() < result.total_count() {
            warn!(
                "Batch completed with {} failed images out of {}",
                result.total_count() - result.success_count(),
                result.total_count()
            );
        } else {
            info!(
                "Batch completed successfully: {} images resized",
                result.total_count()
            );
        }

        Ok(result)
    }
}

/// Resizes one image synchronously and shapes the outcome.
///
/// Runs on the blocking thread pool; the decoded raster lives only inside
/// the resize call and is released before the outcome is returned.
fn resize_single(image: SourceImage, request: &ResizeRequest) -> ResizeOutcome {
    match resize(&image, request) {
        Ok(bytes) => {
            let output_name = derive_output_name(&image.name);
            debug!(
                "'{}' resized to '{}' ({} bytes)",
                image.name,
                output_name,
                bytes.len()
            );
            ResizeOutcome::succeeded(image.name, output_name, bytes)
        }
        Err(e) => ResizeOutcome::failed(image.name, e.to_string()),
    }
}
