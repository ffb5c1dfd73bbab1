use serde::{Deserialize, Serialize};

/// Stage of a batch run as seen by the progress boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProgressStage {
    Processing,
    Complete,
}

/// Progress state reported to the host after each processed image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Number of images processed so far (success or failure)
    pub completed: usize,
    /// Total number of images in the batch
    pub total: usize,
    /// Percentage complete, rounded to the nearest integer (0-100)
    pub percentage: u8,
    /// Whether the batch is still running or done
    pub stage: ProgressStage,
}

impl Progress {
    /// Creates a progress snapshot after `completed` of `total` images.
    pub fn new(completed: usize, total: usize) -> Self {
        let percentage = if total > 0 {
            (completed as f64 / total as f64 * 100.0).round() as u8
        } else {
            0
        };

        let stage = if completed == total && total > 0 {
            ProgressStage::Complete
        } else {
            ProgressStage::Processing
        };

        Self {
            completed,
            total,
            percentage,
            stage,
        }
    }
}
