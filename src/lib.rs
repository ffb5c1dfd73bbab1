// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod processing;
pub mod packaging;
pub mod report;
mod pipeline;

// Public exports for external consumers
pub use crate::core::{
    BatchResult, Progress, ProgressStage, ResizeOutcome, ResizeRequest, SourceImage,
};
pub use crate::packaging::pack;
pub use crate::pipeline::resize_and_package;
pub use crate::processing::BatchOrchestrator;
pub use crate::report::{archive_file_name, ArchiveSink, BatchSummary, ResultReporter};
pub use crate::utils::{PreconditionError, ResizerError, ResizerResult};
