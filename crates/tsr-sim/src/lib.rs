//! `tsr-sim` — the drive state machine and tick loop of the tsr engine.
//!
//! # State machine
//!
//! ```text
//!            start()                 proximity hit
//!   Idle ────────────▶ Running ─────────────────────▶ Paused
//!     ▲                  │ ▲                             │
//!     │                  │ └────── resume deadline ──────┘
//!     │                  └────── position ≥ length ──▶ Finished
//!     │                                                  │
//!     └────── stop() from Running/Paused/Finished ───────┘
//!             (start() from any state begins a fresh run)
//! ```
//!
//! Every transition happens inside `tick(now)` or a command; between calls
//! the state is a plain data snapshot safe to read from a UI layer.  The
//! `Paused` variant carries both the active marker and the resume deadline,
//! so "active marker iff paused" and "stop cancels the pending resume" are
//! properties of the representation, not of careful bookkeeping.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `serde`   | Adds serde derives to snapshots and state enums.        |
//! | `fx-hash` | Replaces SipHash with FxHash for the triggered set.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tsr_core::DriveConfig;
//! use tsr_sim::{DriveLoop, FrameRunner, NoopObserver, SystemClock};
//! use tsr_track::Track;
//!
//! let mut drive = DriveLoop::new(Track::demo(), DriveConfig::default())?;
//! let mut runner = FrameRunner::new(SystemClock::new(), &drive.config);
//! let mut obs = NoopObserver;
//! let now = runner.clock_mut().now();
//! drive.start(now, &mut obs);
//! runner.run(&mut drive, &mut obs);
//! assert!(drive.is_finished());
//! ```

pub mod clock;
pub mod drive;
pub mod error;
pub mod observer;
pub mod runner;
pub mod state;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use clock::{Clock, ManualClock, SystemClock};
pub use drive::DriveLoop;
pub use error::{SimError, SimResult};
pub use observer::{DriveObserver, NoopObserver};
pub use runner::FrameRunner;
pub use state::{DrivePhase, DriveSnapshot, DriveState, TriggeredSet};
