//! `tsr-history` — session scan log, summary stats, and export backends.
//!
//! | Module     | Role                                                 |
//! |------------|------------------------------------------------------|
//! | `history`  | Ordered in-memory log and headline statistics        |
//! | `recorder` | `DriveObserver` feeding detections into the log      |
//! | `writer`   | The `HistoryWriter` trait                            |
//! | `json`     | Pretty-printed JSON array export (full records)      |
//! | `csv`      | Flat scalar-column CSV export                        |
//!
//! # Usage
//!
//! ```rust,ignore
//! use tsr_classify::MockClassifier;
//! use tsr_history::{JsonWriter, ScanRecorder};
//!
//! let mut recorder = ScanRecorder::new(MockClassifier::new(42), 1_700_000_000);
//! drive.start(clock.now(), &mut recorder);
//! runner.run(&mut drive, &mut recorder);
//!
//! let history = recorder.into_history();
//! let mut writer = JsonWriter::new(Path::new("scan_history.json"))?;
//! history.export(&mut writer)?;
//! ```

pub mod csv;
pub mod error;
pub mod history;
pub mod json;
pub mod recorder;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{ExportError, ExportResult};
pub use history::{HistoryStats, ScanHistory};
pub use json::JsonWriter;
pub use recorder::ScanRecorder;
pub use writer::HistoryWriter;
