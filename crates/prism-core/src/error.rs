//! Error types for prism-core.

use thiserror::Error;

/// Result type alias for prism-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in prism-core.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration parameter.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Request longer than the configured sample guard.
    #[error("Too many samples: {len} (limit {max})")]
    TooManySamples { len: usize, max: usize },
}
