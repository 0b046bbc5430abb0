//! Error types for tsr-track.

use thiserror::Error;

/// Violations of the track invariants, reported by [`TrackBuilder::build`].
///
/// [`TrackBuilder::build`]: crate::TrackBuilder::build
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("track length {length} must be positive and finite")]
    InvalidLength { length: f64 },

    #[error("marker \"{name}\" at {position} lies outside the open interval (0, {length})")]
    OutOfBounds {
        name:     String,
        position: f64,
        length:   f64,
    },

    #[error("marker \"{name}\" at {position} does not increase past the previous marker at {previous}")]
    Unordered {
        name:     String,
        position: f64,
        previous: f64,
    },

    #[error("marker name \"{name}\" appears more than once")]
    DuplicateName { name: String },
}

/// Alias for `Result<T, TrackError>`.
pub type TrackResult<T> = Result<T, TrackError>;
