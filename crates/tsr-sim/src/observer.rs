//! Drive observer trait for progress reporting and data collection.

use tsr_core::Millis;
use tsr_track::TrackMarker;

use crate::state::DriveSnapshot;

/// Callbacks invoked by [`DriveLoop`][crate::DriveLoop] after state changes.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  On a transition tick the semantic hook
/// fires first (`on_marker_detected` / `on_resumed` / `on_finished`), then
/// `on_snapshot` with the same post-transition snapshot; plain advances and
/// commands emit `on_snapshot` alone.  `now` is the session time the loop
/// was last given.
///
/// # Example — detection printer
///
/// ```rust,ignore
/// struct DetectionPrinter;
///
/// impl DriveObserver for DetectionPrinter {
///     fn on_marker_detected(&mut self, now: Millis, marker: &TrackMarker, snap: &DriveSnapshot) {
///         println!("{now}: {} at position {:.0}", marker.name, snap.position);
///     }
/// }
/// ```
pub trait DriveObserver {
    /// Called with the fresh snapshot after every state change.
    fn on_snapshot(&mut self, _now: Millis, _snapshot: &DriveSnapshot) {}

    /// A marker entered the detection window; the drive is now paused on it.
    fn on_marker_detected(&mut self, _now: Millis, _marker: &TrackMarker, _snapshot: &DriveSnapshot) {}

    /// The dwell elapsed; the drive resumed past `marker`.
    fn on_resumed(&mut self, _now: Millis, _marker: &TrackMarker, _snapshot: &DriveSnapshot) {}

    /// The drive reached the end of the track (terminal).
    fn on_finished(&mut self, _now: Millis, _snapshot: &DriveSnapshot) {}
}

/// A [`DriveObserver`] that does nothing.  Use when you need to issue
/// commands or ticks but don't want callbacks.
pub struct NoopObserver;

impl DriveObserver for NoopObserver {}
