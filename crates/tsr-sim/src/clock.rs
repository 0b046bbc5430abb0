//! Time sources for pacing a drive.
//!
//! # Why this exists
//!
//! The drive loop never reads a clock — it is handed a `Millis` stamp with
//! every command and tick.  Pacing is the runner's job, and the runner only
//! needs two operations: *what time is it* and *let that much time pass*.
//! Putting those behind a trait lets tests substitute [`ManualClock`], a
//! virtually advanced clock, and replay any scheduling pattern (steady
//! frames, starved ticks, dwell expiry) deterministically, while the demo
//! binary runs the identical code against [`SystemClock`] and real sleeps.

use std::time::{Duration, Instant};

use tsr_core::Millis;

/// A session time source.
pub trait Clock {
    /// Current session time.  Monotonic within a session.
    fn now(&mut self) -> Millis;

    /// Let `ms` milliseconds pass: a real sleep for wall clocks, an
    /// instantaneous jump for virtual ones.
    fn wait(&mut self, ms: u64);
}

// ── SystemClock ───────────────────────────────────────────────────────────────

/// Wall-clock time source with the session origin pinned at construction.
///
/// Backed by `Instant`, so `now()` is monotonic even if the system time is
/// adjusted mid-run.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&mut self) -> Millis {
        Millis(self.origin.elapsed().as_millis() as u64)
    }

    fn wait(&mut self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

// ── ManualClock ───────────────────────────────────────────────────────────────

/// Virtual time source advanced by hand.
///
/// `wait` jumps forward instantly, so a full multi-second drive replays in
/// microseconds of test time with exactly the transitions a real run would
/// make.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Millis,
}

impl ManualClock {
    /// A clock at session time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// A clock already at `ms`.
    pub fn at(ms: u64) -> Self {
        Self { now: Millis(ms) }
    }

    /// Jump forward by `ms` milliseconds.
    pub fn advance(&mut self, ms: u64) {
        self.now = self.now + ms;
    }
}

impl Clock for ManualClock {
    fn now(&mut self) -> Millis {
        self.now
    }

    fn wait(&mut self, ms: u64) {
        self.advance(ms);
    }
}
