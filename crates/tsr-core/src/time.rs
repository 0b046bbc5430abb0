//! Session time model and drive configuration.
//!
//! # Design
//!
//! Time is represented as milliseconds since an arbitrary session origin,
//! wrapped in the `Millis` newtype.  The drive loop never reads a wall clock
//! itself — every command and tick receives a `Millis` stamp from its caller,
//! which is what makes runs replayable under a virtual clock in tests.
//!
//! Distance advance is normalized against a reference frame duration:
//!
//!   delta = speed × elapsed_ms / frame_ms
//!
//! so at the default 16 ms frame a 1× drive covers one distance unit per
//! frame regardless of how irregular the real tick cadence is.  A starved
//! scheduler therefore produces one larger step, never a timing error.

use std::fmt;

use crate::error::{TsrError, TsrResult};

// ── Millis ────────────────────────────────────────────────────────────────────

/// A session timestamp in milliseconds.
///
/// Stored as `u64`: a session would have to run for ~585 million years to
/// overflow.  Ordering and arithmetic are exact — no floating-point drift in
/// deadline comparisons.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    /// Return the timestamp `ms` milliseconds after `self`.
    #[inline]
    pub fn offset(self, ms: u64) -> Millis {
        Millis(self.0 + ms)
    }

    /// Milliseconds elapsed from `earlier` to `self`.
    ///
    /// Saturates to 0 if `earlier` is actually later — a wall clock observed
    /// through coarse integer milliseconds may report the same or an earlier
    /// instant twice, and that must degrade to a zero-length tick.
    #[inline]
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Whole seconds since the session origin (for record timestamps).
    #[inline]
    pub fn as_secs(self) -> u64 {
        self.0 / 1_000
    }
}

impl std::ops::Add<u64> for Millis {
    type Output = Millis;
    #[inline]
    fn add(self, rhs: u64) -> Millis {
        Millis(self.0 + rhs)
    }
}

impl std::ops::Sub for Millis {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Millis) -> u64 {
        self.0.saturating_sub(rhs.0)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// ── DriveConfig ───────────────────────────────────────────────────────────────

/// Tunable parameters of a drive session.
///
/// `DriveConfig` is cheap to copy and intentionally holds no heap data.
/// The defaults reproduce the reference demo: 16 ms frames, a 1×–5× speed
/// slider starting at 2×, a 15-unit detection window, and a 2 s base dwell.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriveConfig {
    /// Reference frame duration in milliseconds.  One frame at 1× speed
    /// advances exactly one distance unit.
    pub frame_ms: u64,
    /// Lowest accepted speed multiplier.  Out-of-range requests clamp here.
    pub min_speed: f64,
    /// Highest accepted speed multiplier.
    pub max_speed: f64,
    /// Multiplier a fresh loop starts with (clamped like any other value).
    pub initial_speed: f64,
    /// Maximum distance at which a marker counts as reached.
    pub proximity_threshold: f64,
    /// Dwell at 1× speed, in milliseconds.  Scaled by `1 / speed`, so a 2 s
    /// pause at 1× shrinks to 0.4 s at 5×.
    pub base_dwell_ms: u64,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            frame_ms:            16,
            min_speed:           1.0,
            max_speed:           5.0,
            initial_speed:       2.0,
            proximity_threshold: 15.0,
            base_dwell_ms:       2_000,
        }
    }
}

impl DriveConfig {
    /// Check internal consistency.  Call once when a loop is constructed;
    /// per-tick paths assume a validated config.
    pub fn validate(&self) -> TsrResult<()> {
        if self.frame_ms == 0 {
            return Err(TsrError::Config("frame_ms must be positive".into()));
        }
        if !(self.min_speed.is_finite() && self.max_speed.is_finite()) {
            return Err(TsrError::Config("speed bounds must be finite".into()));
        }
        if self.min_speed <= 0.0 || self.min_speed > self.max_speed {
            return Err(TsrError::Config(format!(
                "speed bounds {}..{} must satisfy 0 < min <= max",
                self.min_speed, self.max_speed
            )));
        }
        if !self.proximity_threshold.is_finite() || self.proximity_threshold <= 0.0 {
            return Err(TsrError::Config("proximity_threshold must be positive".into()));
        }
        Ok(())
    }

    /// Clamp a requested speed multiplier into the supported range.
    ///
    /// Never rejects: out-of-range values snap to the nearest bound, and a
    /// NaN request falls back to the minimum (NaN would otherwise pass
    /// through `f64::clamp` unchanged).
    #[inline]
    pub fn clamp_speed(&self, multiplier: f64) -> f64 {
        if multiplier.is_nan() {
            self.min_speed
        } else {
            multiplier.clamp(self.min_speed, self.max_speed)
        }
    }

    /// Pause duration for a marker hit at the given speed.
    #[inline]
    pub fn dwell_ms(&self, speed: f64) -> u64 {
        (self.base_dwell_ms as f64 / speed).round() as u64
    }

    /// Distance covered in `elapsed_ms` at the given speed.
    #[inline]
    pub fn distance_delta(&self, speed: f64, elapsed_ms: u64) -> f64 {
        speed * elapsed_ms as f64 / self.frame_ms as f64
    }
}
