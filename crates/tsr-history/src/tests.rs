//! Tests for the scan log, the drive-loop bridge, and both export backends.

use tsr_classify::{Classification, MockClassifier};
use tsr_core::{ClassId, DriveConfig, SignCategory, WarningLevel};

use crate::history::ScanHistory;

const SEED: u64 = 7;
const BASE_UNIX: i64 = 1_700_000_000;

/// A full record as the classifier would emit it.
fn scanned(name: &str, unix_time_secs: i64) -> Classification {
    MockClassifier::new(SEED)
        .classify_named(name, unix_time_secs)
        .expect("catalog name")
}

/// A minimal hand-built record for stats arithmetic.
fn record_with(name: &str, confidence: f64) -> Classification {
    Classification {
        sign_name: name.to_string(),
        category: SignCategory::Other,
        confidence,
        instruction: "Give way to crossing traffic".to_string(),
        warning_level: WarningLevel::Low,
        german_gtsrb_class: ClassId(13),
        top_predictions: Vec::new(),
        image: None,
        unix_time_secs: 0,
    }
}

#[cfg(test)]
mod history_tests {
    use super::*;

    #[test]
    fn records_keep_arrival_order() {
        let mut history = ScanHistory::new();
        assert!(history.is_empty());

        history.push(scanned("Stop", 1));
        history.push(scanned("Yield", 2));
        history.push(scanned("Stop", 3));

        assert_eq!(history.len(), 3);
        let names: Vec<&str> = history.iter().map(|r| r.sign_name.as_str()).collect();
        assert_eq!(names, vec!["Stop", "Yield", "Stop"]);
        assert_eq!(history.records()[2].unix_time_secs, 3);
    }

    #[test]
    fn clear_empties_the_log() {
        let mut history = ScanHistory::new();
        history.push(scanned("Stop", 1));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.stats().total_scans, 0);
    }
}

#[cfg(test)]
mod stats_tests {
    use super::*;

    #[test]
    fn empty_log_yields_zeroed_stats() {
        let stats = ScanHistory::new().stats();
        assert_eq!(stats.total_scans, 0);
        assert_eq!(stats.avg_confidence, 0.0);
        assert_eq!(stats.most_common, None);
    }

    #[test]
    fn average_confidence_rounds_to_one_decimal() {
        let mut history = ScanHistory::new();
        history.push(record_with("Stop", 90.0));
        history.push(record_with("Yield", 91.5));
        let stats = history.stats();
        assert_eq!(stats.total_scans, 2);
        assert_eq!(stats.avg_confidence, 90.8); // 90.75 rounds up
    }

    #[test]
    fn most_common_counts_by_name() {
        let mut history = ScanHistory::new();
        history.push(record_with("Stop", 90.0));
        history.push(record_with("Yield", 90.0));
        history.push(record_with("Yield", 90.0));
        assert_eq!(history.stats().most_common.as_deref(), Some("Yield"));
    }

    #[test]
    fn most_common_tie_goes_to_first_seen() {
        let mut history = ScanHistory::new();
        history.push(record_with("Yield", 90.0));
        history.push(record_with("Stop", 90.0));
        history.push(record_with("Stop", 90.0));
        history.push(record_with("Yield", 90.0));
        assert_eq!(history.stats().most_common.as_deref(), Some("Yield"));
    }
}

#[cfg(test)]
mod recorder_tests {
    use super::*;
    use tsr_sim::{Clock, DriveLoop, FrameRunner, ManualClock};
    use tsr_track::TrackBuilder;

    use crate::recorder::ScanRecorder;

    fn run_scenario(recorder: &mut ScanRecorder) {
        let mut b = TrackBuilder::new(1_000.0);
        b.marker(80.0, "Speed Limit 50", SignCategory::Speed);
        b.marker(200.0, "Yield", SignCategory::Danger);
        b.marker(320.0, "Stop", SignCategory::Prohibition);
        let mut drive = DriveLoop::new(b.build().unwrap(), DriveConfig::default()).unwrap();
        let mut runner = FrameRunner::new(ManualClock::new(), &drive.config);

        drive.start(runner.clock_mut().now(), recorder);
        runner.run(&mut drive, recorder);
        assert!(drive.is_finished());
    }

    #[test]
    fn one_record_per_detection_in_track_order() {
        let mut recorder = ScanRecorder::new(MockClassifier::new(SEED), BASE_UNIX);
        run_scenario(&mut recorder);

        assert_eq!(recorder.skipped(), 0);
        let history = recorder.into_history();
        assert_eq!(history.len(), 3);

        let names: Vec<&str> = history.iter().map(|r| r.sign_name.as_str()).collect();
        assert_eq!(names, vec!["Speed Limit 50", "Yield", "Stop"]);

        let classes: Vec<u8> = history.iter().map(|r| r.german_gtsrb_class.0).collect();
        assert_eq!(classes, vec![2, 13, 14]);
    }

    #[test]
    fn timestamps_anchor_session_time_to_the_base() {
        let mut recorder = ScanRecorder::new(MockClassifier::new(SEED), BASE_UNIX);
        run_scenario(&mut recorder);

        // Detections land at session times 528 ms, 2488 ms, and 4448 ms.
        let stamps: Vec<i64> = recorder
            .history()
            .iter()
            .map(|r| r.unix_time_secs)
            .collect();
        assert_eq!(stamps, vec![BASE_UNIX, BASE_UNIX + 2, BASE_UNIX + 4]);
    }

    #[test]
    fn records_match_a_direct_classification() {
        let mut recorder = ScanRecorder::new(MockClassifier::new(SEED), BASE_UNIX);
        run_scenario(&mut recorder);

        let first = &recorder.history().records()[0];
        let direct = scanned("Speed Limit 50", first.unix_time_secs);
        assert_eq!(*first, direct);
    }

    #[test]
    fn uncataloged_marker_names_are_counted_not_recorded() {
        let mut b = TrackBuilder::new(200.0);
        b.marker(80.0, "Mystery Sign", SignCategory::Danger);
        let mut drive = DriveLoop::new(b.build().unwrap(), DriveConfig::default()).unwrap();
        let mut runner = FrameRunner::new(ManualClock::new(), &drive.config);
        let mut recorder = ScanRecorder::new(MockClassifier::new(SEED), BASE_UNIX);

        drive.start(runner.clock_mut().now(), &mut recorder);
        runner.run(&mut drive, &mut recorder);

        assert_eq!(recorder.skipped(), 1);
        assert!(recorder.history().is_empty());
    }
}

#[cfg(test)]
mod export_tests {
    use super::*;
    use tempfile::TempDir;

    use crate::writer::HistoryWriter;
    use crate::{CsvWriter, JsonWriter};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn sample_history() -> ScanHistory {
        let mut history = ScanHistory::new();
        history.push(scanned("Stop", BASE_UNIX));
        history.push(scanned("Road Work", BASE_UNIX + 2));
        history
    }

    #[test]
    fn csv_header_and_rows() {
        let dir = tmp();
        let path = dir.path().join("scan_history.csv");
        let mut writer = CsvWriter::new(&path).unwrap();
        sample_history().export(&mut writer).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            [
                "timestamp",
                "sign_name",
                "category",
                "confidence",
                "warning_level",
                "gtsrb_class",
                "instruction",
            ]
        );

        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], BASE_UNIX.to_string().as_str());
        assert_eq!(&rows[0][1], "Stop");
        assert_eq!(&rows[0][2], "Prohibition");
        assert!(rows[0][3].parse::<f64>().unwrap() >= 86.0);
        assert_eq!(&rows[0][4], "high");
        assert_eq!(&rows[0][5], "14");
        assert_eq!(&rows[0][6], "Come to a complete stop");
        assert_eq!(&rows[1][1], "Road Work");
    }

    #[test]
    fn json_round_trips_full_records() {
        let dir = tmp();
        let path = dir.path().join("scan_history.json");
        let history = sample_history();
        let mut writer = JsonWriter::new(&path).unwrap();
        history.export(&mut writer).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with('['), "must be one array: {text}");
        assert!(text.contains("\"signName\""), "wire names are camelCase");

        let back: Vec<Classification> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, history.records());
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut csv_writer = CsvWriter::new(&dir.path().join("a.csv")).unwrap();
        csv_writer.finish().unwrap();
        csv_writer.finish().unwrap();

        let mut json_writer = JsonWriter::new(&dir.path().join("a.json")).unwrap();
        json_writer.finish().unwrap();
        json_writer.finish().unwrap();
    }

    #[test]
    fn empty_history_exports_cleanly() {
        let dir = tmp();
        let path = dir.path().join("empty.json");
        let mut writer = JsonWriter::new(&path).unwrap();
        ScanHistory::new().export(&mut writer).unwrap();

        let back: Vec<Classification> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(back.is_empty());
    }
}
