//! Core data model for batch resizing.
//!
//! This module contains the fundamental types used throughout the crate:
//! - [`SourceImage`]: a user-selected image handed over by the host
//! - [`ResizeRequest`]: batch-wide resize configuration
//! - [`ResizeOutcome`] / [`BatchResult`]: per-image and per-batch results
//! - [`Progress`]: progress state reported after each processed image

mod progress;
mod types;

pub use progress::{Progress, ProgressStage};
pub use types::{BatchResult, ResizeOutcome, ResizeRequest, SourceImage};
