//! autodrive — scripted drive down the demo track.
//!
//! Plays the eight-sign demo track through the drive loop, classifies each
//! detected sign with the seeded mock classifier, prints a spoken-style
//! alert per detection, and exports the scan history as JSON and CSV.
//!
//! Runs on the virtual clock by default, so the whole drive completes in
//! milliseconds; flip `REALTIME` to pace frames against the wall clock and
//! watch the run unfold at drive speed.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use tsr_classify::{alert_text, Language, MockClassifier};
use tsr_core::{DriveConfig, Millis};
use tsr_history::{CsvWriter, JsonWriter, ScanRecorder};
use tsr_sim::{
    Clock, DriveLoop, DriveObserver, DriveSnapshot, FrameRunner, ManualClock, SystemClock,
};
use tsr_track::{Track, TrackMarker};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:            u64  = 42;
const SPEED:           f64  = 2.0;
const LANGUAGE_CODE:   &str = "en";
const BASE_UNIX_SECS:  i64  = 1_700_000_000; // fixed reference Monday 00:00 UTC
const REALTIME:        bool = false;

// ── Console observer ──────────────────────────────────────────────────────────

/// Prints an alert per detection and feeds the scan recorder.
struct ConsoleAlerts {
    recorder:   ScanRecorder,
    language:   Language,
    detections: usize,
}

impl ConsoleAlerts {
    fn new(recorder: ScanRecorder, language: Language) -> Self {
        Self {
            recorder,
            language,
            detections: 0,
        }
    }
}

impl DriveObserver for ConsoleAlerts {
    fn on_marker_detected(&mut self, now: Millis, marker: &TrackMarker, snapshot: &DriveSnapshot) {
        let before = self.recorder.history().len();
        self.recorder.on_marker_detected(now, marker, snapshot);
        self.detections += 1;

        println!(
            "[{:>7}] detected {:<22} at pos {:>6.1} ({})",
            now.to_string(),
            marker.name,
            snapshot.position,
            marker.category,
        );
        if self.recorder.history().len() > before {
            if let Some(record) = self.recorder.history().records().last() {
                println!(
                    "          {:.1}% confidence, {} warning",
                    record.confidence, record.warning_level
                );
                println!("          \u{1f50a} {}", alert_text(self.language, record));
            }
        } else {
            println!("          (not a catalog sign, scan skipped)");
        }
    }

    fn on_resumed(&mut self, now: Millis, marker: &TrackMarker, _snapshot: &DriveSnapshot) {
        println!("[{:>7}] resuming past {}", now.to_string(), marker.name);
    }

    fn on_finished(&mut self, now: Millis, snapshot: &DriveSnapshot) {
        println!(
            "[{:>7}] end of track at pos {:.1}, {} signs triggered",
            now.to_string(),
            snapshot.position,
            snapshot.triggered.len()
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let language = Language::from_code(LANGUAGE_CODE);

    println!("=== autodrive — traffic sign playback ===");
    println!("Speed: {SPEED}x  |  Seed: {SEED}  |  Alerts: {language}");
    println!();

    // 1. The demo track.
    let track = Track::demo();
    println!(
        "Track: {} units, {} signs",
        track.length(),
        track.marker_count()
    );

    // 2. Drive loop.
    let config = DriveConfig {
        initial_speed: SPEED,
        ..DriveConfig::default()
    };
    let mut drive = DriveLoop::new(track, config)?;

    // 3. Scan recorder behind the console observer.
    let recorder = ScanRecorder::new(MockClassifier::new(SEED), BASE_UNIX_SECS);
    let mut obs = ConsoleAlerts::new(recorder, language);
    println!();

    // 4. Run to the end of the track.
    let t0 = Instant::now();
    let ticks = if REALTIME {
        let mut runner = FrameRunner::new(SystemClock::default(), &drive.config);
        drive.start(runner.clock_mut().now(), &mut obs);
        runner.run(&mut drive, &mut obs)
    } else {
        let mut runner = FrameRunner::new(ManualClock::new(), &drive.config);
        drive.start(runner.clock_mut().now(), &mut obs);
        runner.run(&mut drive, &mut obs)
    };
    let elapsed = t0.elapsed();
    println!();
    println!(
        "Drive complete in {:.3} s ({} ticks, {} detections)",
        elapsed.as_secs_f64(),
        ticks,
        obs.detections
    );

    // 5. Session stats.
    let skipped = obs.recorder.skipped();
    let history = obs.recorder.into_history();
    let stats = history.stats();
    println!();
    println!("Scan history:");
    println!("  total scans    : {}", stats.total_scans);
    println!("  avg confidence : {:.1}%", stats.avg_confidence);
    println!(
        "  most common    : {}",
        stats.most_common.as_deref().unwrap_or("n/a")
    );
    if skipped > 0 {
        println!("  skipped        : {skipped} (markers without a catalog class)");
    }

    // 6. Export.
    std::fs::create_dir_all("output/autodrive")?;
    let mut json = JsonWriter::new(Path::new("output/autodrive/scan_history.json"))?;
    history.export(&mut json)?;
    let mut csv = CsvWriter::new(Path::new("output/autodrive/scan_history.csv"))?;
    history.export(&mut csv)?;
    println!();
    println!("  scan_history.json : {} records", history.len());
    println!("  scan_history.csv  : {} rows", history.len());

    // 7. Scan table.
    println!();
    println!(
        "{:<6} {:<22} {:<18} {:>6}  {}",
        "Time", "Sign", "Category", "Conf", "Warning"
    );
    println!("{}", "-".repeat(64));
    for record in history.iter() {
        println!(
            "{:<6} {:<22} {:<18} {:>5.1}%  {}",
            record.unix_time_secs - BASE_UNIX_SECS,
            record.sign_name,
            record.category,
            record.confidence,
            record.warning_level,
        );
    }

    Ok(())
}
