//! Drive state records.
//!
//! # Design
//!
//! The phase is an enum whose `Paused` variant carries the active marker and
//! the resume deadline.  That representation makes two invariants structural
//! instead of checked: an active marker can only exist while paused, and
//! dropping the phase (on stop) drops the pending resume with it, so no
//! stale timer can outlive a reset.
//!
//! The full run record is replaced wholesale on `start()`/`stop()` — one
//! assignment, never field-by-field patching — which is what makes the reset
//! symmetric between the two commands.

use tsr_core::{MarkerId, Millis};

/// Set of already-triggered marker ids within one run.
#[cfg(feature = "fx-hash")]
pub type TriggeredSet = rustc_hash::FxHashSet<MarkerId>;
/// Set of already-triggered marker ids within one run.
#[cfg(not(feature = "fx-hash"))]
pub type TriggeredSet = std::collections::HashSet<MarkerId>;

// ── DriveState ────────────────────────────────────────────────────────────────

/// Flat state label exposed in snapshots.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DriveState {
    #[default]
    Idle,
    Running,
    Paused,
    Finished,
}

impl DriveState {
    pub fn as_str(self) -> &'static str {
        match self {
            DriveState::Idle     => "idle",
            DriveState::Running  => "running",
            DriveState::Paused   => "paused",
            DriveState::Finished => "finished",
        }
    }
}

impl std::fmt::Display for DriveState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

// ── DrivePhase ────────────────────────────────────────────────────────────────

/// Internal phase of the drive loop, with per-variant payloads.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DrivePhase {
    /// No run in progress (initial state, and the target of `stop()`).
    Idle,
    /// Advancing along the track each tick.
    Running,
    /// Holding on a detected marker until the resume deadline passes.
    Paused {
        marker:    MarkerId,
        resume_at: Millis,
    },
    /// Reached the end of the track.  Terminal; only `start()` leaves it.
    Finished,
}

impl DrivePhase {
    /// The flat label for this phase.
    pub fn state(self) -> DriveState {
        match self {
            DrivePhase::Idle          => DriveState::Idle,
            DrivePhase::Running       => DriveState::Running,
            DrivePhase::Paused { .. } => DriveState::Paused,
            DrivePhase::Finished      => DriveState::Finished,
        }
    }

    /// The marker being held on, present exactly while paused.
    pub fn active_marker(self) -> Option<MarkerId> {
        match self {
            DrivePhase::Paused { marker, .. } => Some(marker),
            _ => None,
        }
    }
}

// ── RunState ──────────────────────────────────────────────────────────────────

/// Mutable state of one playback session.
pub(crate) struct RunState {
    pub phase:        DrivePhase,
    pub position:     f64,
    pub triggered:    TriggeredSet,
    /// Tick origin: the stamp of the previous effective tick.  `None` until
    /// a run starts.
    pub last_tick_at: Option<Millis>,
}

impl RunState {
    /// The reset record shared by `stop()` and a fresh loop.
    pub fn idle() -> Self {
        Self {
            phase:        DrivePhase::Idle,
            position:     0.0,
            triggered:    TriggeredSet::default(),
            last_tick_at: None,
        }
    }

    /// A fresh run entering `Running` with its tick origin at `now`.
    pub fn started(now: Millis) -> Self {
        Self {
            phase:        DrivePhase::Running,
            position:     0.0,
            triggered:    TriggeredSet::default(),
            last_tick_at: Some(now),
        }
    }
}

// ── DriveSnapshot ─────────────────────────────────────────────────────────────

/// Read-only run-state record emitted after every state change.
///
/// Plain owned data, safe to hand to a render layer: `position` projects
/// onto the visual coordinate, `triggered` onto marker icon styling (ids
/// ascend with position, so the vec is also in track order).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriveSnapshot {
    pub position:      f64,
    pub speed:         f64,
    pub state:         DriveState,
    pub active_marker: Option<MarkerId>,
    pub triggered:     Vec<MarkerId>,
}
