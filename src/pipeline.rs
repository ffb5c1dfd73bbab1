//! The composite resize-pack-report operation.

use crate::core::{Progress, ResizeRequest, SourceImage};
use crate::packaging::pack;
use crate::processing::BatchOrchestrator;
use crate::report::{ArchiveSink, BatchSummary, ResultReporter};
use crate::utils::ResizerResult;

/// Runs a full batch end to end: resize every image, pack the successes
/// into a ZIP, and report the result through `reporter`.
///
/// Precondition violations abort before any image is processed; per-image
/// failures are recorded in the outcomes and never abort the run. With zero
/// successes no archive is produced and the sink is never called.
pub async fn resize_and_package<S: ArchiveSink>(
    images: Vec<SourceImage>,
    request: ResizeRequest,
    progress: impl FnMut(Progress),
    reporter: &mut ResultReporter<S>,
) -> ResizerResult<BatchSummary> {
    let orchestrator = BatchOrchestrator::new(request);
    let result = orchestrator.run(images, progress).await?;

    let archive = pack(&result.outcomes)?;
    reporter.report(&result, archive.as_deref())
}
