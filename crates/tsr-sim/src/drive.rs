//! The drive loop: command surface and per-tick transition.
//!
//! # Tick anatomy
//!
//! Each `tick(now)` while running works through the same sequence:
//!
//! ```text
//! ① Elapsed   — milliseconds since the previous effective tick; zero is
//!               a no-op (coarse clocks may stamp two ticks identically).
//! ② Advance   — delta = speed × elapsed / frame_ms, added to position.
//! ③ Finish    — position past the track end clamps to the exact length
//!               and terminates the run.  Checked before detection, so a
//!               final jump cannot pause on a marker it flew over.
//! ④ Detect    — first untriggered marker within the threshold window
//!               pauses the drive and schedules the resume deadline.
//! ```
//!
//! While paused, ticks only compare `now` against the stored deadline; the
//! tick origin restarts at the resume instant so paused wall time never
//! converts into distance.
//!
//! Commands (`start`, `stop`, `set_speed`) apply between ticks on the same
//! logical timeline.  There is no interior mutability and no locking; the
//! loop assumes a single writer.

use tsr_core::{DriveConfig, MarkerId, Millis};
use tsr_track::{Track, TrackMarker};

use crate::error::{SimError, SimResult};
use crate::observer::DriveObserver;
use crate::state::{DrivePhase, DriveSnapshot, DriveState, RunState, TriggeredSet};

/// Owns one track and the mutable state of its current playback run.
///
/// `track` and `config` are read-only after construction and public for
/// render layers; run state is private so every mutation passes through the
/// command/tick surface that maintains the invariants.
pub struct DriveLoop {
    pub track:  Track,
    pub config: DriveConfig,
    speed:      f64,
    /// Latest session time seen by any command or tick; stamps snapshot
    /// emissions from time-free commands (`stop`, `set_speed`).
    now:        Millis,
    run:        RunState,
}

impl DriveLoop {
    /// Create an idle loop for `track`.
    ///
    /// The config is validated once here; the initial speed multiplier is
    /// clamped like any later `set_speed` request.
    pub fn new(track: Track, config: DriveConfig) -> SimResult<Self> {
        config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;
        let speed = config.clamp_speed(config.initial_speed);
        Ok(Self {
            track,
            config,
            speed,
            now: Millis::ZERO,
            run: RunState::idle(),
        })
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Begin a fresh run at `now`: position 0, empty triggered set, state
    /// `Running`.
    ///
    /// Calling this while a run is in progress (running or paused) is the
    /// same full reset — stop-then-start — never an error.  The previous
    /// run's record is discarded wholesale, which also discards any pending
    /// resume deadline.
    pub fn start<O: DriveObserver>(&mut self, now: Millis, obs: &mut O) {
        self.now = now;
        self.run = RunState::started(now);
        obs.on_snapshot(now, &self.snapshot());
    }

    /// Cancel the current run and return to `Idle` with the same reset
    /// `start()` begins from.
    ///
    /// Idempotent: stopping an already idle loop re-emits the idle snapshot
    /// and changes nothing else.
    pub fn stop<O: DriveObserver>(&mut self, obs: &mut O) {
        self.run = RunState::idle();
        obs.on_snapshot(self.now, &self.snapshot());
    }

    /// Update the speed multiplier for this and future ticks.
    ///
    /// Out-of-range values clamp to the configured bounds, never error.
    /// The phase is untouched, and a pending resume deadline keeps the
    /// dwell it was scheduled with.
    pub fn set_speed<O: DriveObserver>(&mut self, multiplier: f64, obs: &mut O) {
        self.speed = self.config.clamp_speed(multiplier);
        obs.on_snapshot(self.now, &self.snapshot());
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance the run to session time `now`.
    ///
    /// The only suspension point of the loop: everything between two calls
    /// sees a plain, consistent data snapshot.  No-op while `Idle` or
    /// `Finished`, and while `Paused` before the resume deadline.
    pub fn tick<O: DriveObserver>(&mut self, now: Millis, obs: &mut O) {
        self.now = now;
        match self.run.phase {
            DrivePhase::Idle | DrivePhase::Finished => {}
            DrivePhase::Paused { marker, resume_at } => {
                if now >= resume_at {
                    self.resume(now, marker, obs);
                }
            }
            DrivePhase::Running => self.advance(now, obs),
        }
    }

    /// Dwell elapsed: clear the active marker and restart the tick origin.
    fn resume<O: DriveObserver>(&mut self, now: Millis, marker: MarkerId, obs: &mut O) {
        self.run.phase = DrivePhase::Running;
        self.run.last_tick_at = Some(now);
        let snap = self.snapshot();
        if let Some(m) = self.track.marker(marker) {
            obs.on_resumed(now, m, &snap);
        }
        obs.on_snapshot(now, &snap);
    }

    /// One running advance: steps ②–④ of the tick anatomy.
    fn advance<O: DriveObserver>(&mut self, now: Millis, obs: &mut O) {
        let last = self.run.last_tick_at.unwrap_or(now);
        self.run.last_tick_at = Some(now);
        let elapsed = now.since(last);
        if elapsed == 0 {
            return;
        }

        let next = self.run.position + self.config.distance_delta(self.speed, elapsed);

        if next >= self.track.length() {
            self.run.position = self.track.length();
            self.run.phase = DrivePhase::Finished;
            let snap = self.snapshot();
            obs.on_finished(now, &snap);
            obs.on_snapshot(now, &snap);
            return;
        }

        self.run.position = next;
        let hit = self
            .track
            .find_proximate(next, &self.run.triggered, self.config.proximity_threshold)
            .map(|m| m.id);

        match hit {
            Some(id) => {
                self.run.triggered.insert(id);
                let resume_at = now.offset(self.config.dwell_ms(self.speed));
                self.run.phase = DrivePhase::Paused { marker: id, resume_at };
                let snap = self.snapshot();
                if let Some(m) = self.track.marker(id) {
                    obs.on_marker_detected(now, m, &snap);
                }
                obs.on_snapshot(now, &snap);
            }
            None => obs.on_snapshot(now, &self.snapshot()),
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Build the outbound run-state record.
    pub fn snapshot(&self) -> DriveSnapshot {
        let mut triggered: Vec<_> = self.run.triggered.iter().copied().collect();
        triggered.sort_unstable();
        DriveSnapshot {
            position:      self.run.position,
            speed:         self.speed,
            state:         self.run.phase.state(),
            active_marker: self.run.phase.active_marker(),
            triggered,
        }
    }

    #[inline]
    pub fn phase(&self) -> DrivePhase {
        self.run.phase
    }

    #[inline]
    pub fn state(&self) -> DriveState {
        self.run.phase.state()
    }

    #[inline]
    pub fn position(&self) -> f64 {
        self.run.position
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// The marker currently held on, present exactly while paused.
    pub fn active_marker(&self) -> Option<&TrackMarker> {
        self.run
            .phase
            .active_marker()
            .and_then(|id| self.track.marker(id))
    }

    /// Ids of markers triggered so far in this run.
    #[inline]
    pub fn triggered(&self) -> &TriggeredSet {
        &self.run.triggered
    }

    /// Names of triggered markers in track order.
    pub fn triggered_names(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.run.triggered.iter().copied().collect();
        ids.sort_unstable();
        ids.into_iter()
            .filter_map(|id| self.track.marker(id))
            .map(|m| m.name.as_str())
            .collect()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(self.run.phase, DrivePhase::Finished)
    }
}
