//! Error types for prism-synth.

use thiserror::Error;

/// Result type alias for prism-synth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in prism-synth.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid parameter passed to a curve or render call.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
