//! Result reporting and the host delivery boundary.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use crate::core::BatchResult;
use crate::utils::{ResizerError, ResizerResult};

/// Host-provided receiver for the final archive bytes.
///
/// The library treats delivery as opaque: whatever "save" or "download"
/// means to the host happens behind this trait.
pub trait ArchiveSink {
    fn deliver(&mut self, file_name: &str, bytes: &[u8]) -> anyhow::Result<()>;
}

/// User-facing summary of one batch run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub success_count: usize,
    pub total_count: usize,
    /// Whether an archive was handed to the sink
    pub delivered: bool,
    pub message: String,
}

/// Suggested archive filename for a given date.
pub fn archive_file_name(date: NaiveDate) -> String {
    format!("resized_images_{}.zip", date.format("%Y-%m-%d"))
}

/// Reports batch results to the user and delivers the archive to the host.
pub struct ResultReporter<S: ArchiveSink> {
    sink: S,
}

impl<S: ArchiveSink> ResultReporter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Reports `result`, delivering `archive` (when present) under a name
    /// stamped with today's local date.
    pub fn report(
        &mut self,
        result: &BatchResult,
        archive: Option<&[u8]>,
    ) -> ResizerResult<BatchSummary> {
        self.report_dated(result, archive, chrono::Local::now().date_naive())
    }

    /// Same as [`report`](Self::report) with an explicit date, for
    /// deterministic tests.
    pub fn report_dated(
        &mut self,
        result: &BatchResult,
        archive: Option<&[u8]>,
        date: NaiveDate,
    ) -> ResizerResult<BatchSummary> {
        let success_count = result.success_count();
        let total_count = result.total_count();

        let delivered = match archive {
            Some(bytes) if success_count > 0 => {
                let file_name = archive_file_name(date);
                self.sink.deliver(&file_name, bytes).map_err(|e| {
                    ResizerError::packaging(format!("Archive delivery failed: {}", e))
                })?;
                info!("Delivered '{}' ({} bytes)", file_name, bytes.len());
                true
            }
            _ => false,
        };

        if success_count == 0 {
            warn!("No image in the batch of {} could be resized", total_count);
        }

        let message = if delivered {
            format!(
                "Successfully resized {} out of {} images. Downloaded as ZIP file.",
                success_count, total_count
            )
        } else {
            format!(
                "Successfully resized {} out of {} images.",
                success_count, total_count
            )
        };

        Ok(BatchSummary {
            success_count,
            total_count,
            delivered,
            message,
        })
    }

    /// Consumes the reporter and returns the sink.
    pub fn into_inner(self) -> S {
        self.sink
    }
}
