//! `ScanRecorder` — bridges the drive loop to the scan history.
//!
//! A [`DriveObserver`] that classifies each detected marker through the
//! mock classifier and appends the resulting record.  Marker names outside
//! the catalog are counted and skipped, never errors — the drive loop does
//! not care whether its observers recognized the sign.

use tsr_classify::MockClassifier;
use tsr_core::Millis;
use tsr_sim::{DriveObserver, DriveSnapshot};
use tsr_track::TrackMarker;

use crate::history::ScanHistory;

/// Records one classification per marker detection.
pub struct ScanRecorder {
    classifier: MockClassifier,
    /// Wall-clock anchor: session time zero maps to this unix time.
    base_unix_secs: i64,
    history: ScanHistory,
    skipped: usize,
}

impl ScanRecorder {
    pub fn new(classifier: MockClassifier, base_unix_secs: i64) -> Self {
        Self {
            classifier,
            base_unix_secs,
            history: ScanHistory::new(),
            skipped: 0,
        }
    }

    /// The log accumulated so far.
    pub fn history(&self) -> &ScanHistory {
        &self.history
    }

    /// Detections whose marker name had no catalog class.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Unwrap the log (e.g. to export after the run).
    pub fn into_history(self) -> ScanHistory {
        self.history
    }

    fn unix_time(&self, now: Millis) -> i64 {
        self.base_unix_secs + now.as_secs() as i64
    }
}

impl DriveObserver for ScanRecorder {
    fn on_marker_detected(&mut self, now: Millis, marker: &TrackMarker, _snapshot: &DriveSnapshot) {
        match self.classifier.classify_named(&marker.name, self.unix_time(now)) {
            Some(record) => self.history.push(record),
            None => self.skipped += 1,
        }
    }
}
