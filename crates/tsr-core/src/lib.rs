//! `tsr-core` — foundational types for the `tsr` traffic-sign demo engine.
//!
//! This crate is a dependency of every other `tsr-*` crate.  It intentionally
//! has no `tsr-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`ids`]      | `MarkerId`, `ClassId`                             |
//! | [`time`]     | `Millis`, `DriveConfig`                           |
//! | [`category`] | `SignCategory`, `WarningLevel`                    |
//! | [`rng`]      | `SimRng` (seeded, per-class derivation)           |
//! | [`error`]    | `TsrError`, `TsrResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                           |
//! |---------|------------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on the data types; used by `tsr-classify` and `tsr-history` |

pub mod category;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use category::{SignCategory, WarningLevel};
pub use error::{TsrError, TsrResult};
pub use ids::{ClassId, MarkerId};
pub use rng::SimRng;
pub use time::{DriveConfig, Millis};
