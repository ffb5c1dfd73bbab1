pub mod error;
pub mod formats;
pub mod naming;

pub use error::{PreconditionError, ResizerError, ResizerResult};
pub use formats::OutputFormat;
pub use naming::derive_output_name;
