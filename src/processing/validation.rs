use crate::core::{ResizeRequest, SourceImage};
use crate::utils::{PreconditionError, ResizerResult};

/// Validates a batch before any processing starts.
///
/// A violation aborts the whole run with zero outcomes; the resize engine
/// is never invoked.
pub fn validate_batch(images: &[SourceImage], request: &ResizeRequest) -> ResizerResult<()> {
    if images.is_empty() {
        return Err(PreconditionError::EmptyBatch.into());
    }

    validate_request(request)
}

/// Validates the resize configuration.
///
/// Both dimensions must be positive, whether or not the aspect ratio is
/// preserved; a locked-aspect request still carries the height the user
/// last entered.
pub fn validate_request(request: &ResizeRequest) -> ResizerResult<()> {
    if request.target_width == 0 {
        return Err(PreconditionError::invalid_dimensions("Width cannot be 0").into());
    }

    if request.target_height == 0 {
        return Err(PreconditionError::invalid_dimensions("Height cannot be 0").into());
    }

    Ok(())
}
