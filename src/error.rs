//! Centralized error type for the prism umbrella crate.
//!
//! Wraps all subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] prism_core::Error),

    #[cfg(feature = "analysis")]
    #[error("Analysis: {0}")]
    Analysis(#[from] prism_analysis::Error),

    #[cfg(feature = "synth")]
    #[error("Synth: {0}")]
    Synth(#[from] prism_synth::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
