//! Frame-paced driver for a [`DriveLoop`].
//!
//! # Why this exists
//!
//! The loop is inert data plus transitions; something must call `tick` on a
//! cadence.  The runner is that something, and it expresses both schedule
//! kinds as waits on its [`Clock`]:
//!
//! - while `Running`, wait one frame and tick — the recurring tick;
//! - while `Paused`, wait exactly the dwell remainder and tick — the
//!   one-shot resume, realized as a deadline poll instead of a registered
//!   callback.
//!
//! Cancellation needs no bookkeeping: `stop()` replaces the run record, the
//! next phase check sees `Idle`, and the runner returns without scheduling
//! anything further.

use tsr_core::DriveConfig;

use crate::clock::Clock;
use crate::drive::DriveLoop;
use crate::observer::DriveObserver;
use crate::state::DrivePhase;

/// Ticks a [`DriveLoop`] to completion against a [`Clock`].
pub struct FrameRunner<C: Clock> {
    clock:    C,
    frame_ms: u64,
}

impl<C: Clock> FrameRunner<C> {
    pub fn new(clock: C, config: &DriveConfig) -> Self {
        Self { clock, frame_ms: config.frame_ms }
    }

    /// Access the clock, e.g. to stamp a `start()` before running.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Recover the clock after a run.
    pub fn into_clock(self) -> C {
        self.clock
    }

    /// Tick `drive` until it finishes or is stopped.  Returns the number of
    /// ticks executed.
    ///
    /// Returns immediately if the drive is already `Idle` or `Finished`;
    /// the caller starts the run.
    pub fn run<O: DriveObserver>(&mut self, drive: &mut DriveLoop, obs: &mut O) -> u64 {
        let mut ticks = 0;
        loop {
            match drive.phase() {
                DrivePhase::Idle | DrivePhase::Finished => return ticks,
                DrivePhase::Running => self.clock.wait(self.frame_ms),
                DrivePhase::Paused { resume_at, .. } => {
                    let now = self.clock.now();
                    self.clock.wait(resume_at.since(now));
                }
            }
            drive.tick(self.clock.now(), obs);
            ticks += 1;
        }
    }
}
