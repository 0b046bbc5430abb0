//! `tsr-track` — the immutable track/marker model and its proximity query.
//!
//! A [`Track`] is the leaf data structure of the engine: an ordered list of
//! [`TrackMarker`]s on a one-dimensional road, built once through
//! [`TrackBuilder`] and shared read-only across drive runs.  The only
//! query with any logic is [`Track::find_proximate`], the ascending scan
//! the drive loop consults after every position advance.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `TrackMarker`.    |

pub mod error;
pub mod track;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TrackError, TrackResult};
pub use track::{Track, TrackBuilder, TrackMarker};
