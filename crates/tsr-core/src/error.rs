//! Engine base error type.
//!
//! Sub-crates define their own error enums (`TrackError`, `SimError`,
//! `ExportError`) and either convert into `TsrError` via `From` or keep
//! them separate; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `tsr-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum TsrError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `tsr-*` crates.
pub type TsrResult<T> = Result<T, TsrError>;
