//! CSV export backend.
//!
//! Flattens each record to scalar columns; the top-3 prediction list stays
//! JSON-only.  Column order:
//!
//! `timestamp, sign_name, category, confidence, warning_level, gtsrb_class,
//! instruction`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tsr_classify::Classification;

use crate::writer::HistoryWriter;
use crate::ExportResult;

/// Writes scan history rows to one CSV file.
pub struct CsvWriter {
    records:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create (or truncate) `path` and write the header row.
    pub fn new(path: &Path) -> ExportResult<Self> {
        let mut records = Writer::from_path(path)?;
        records.write_record([
            "timestamp",
            "sign_name",
            "category",
            "confidence",
            "warning_level",
            "gtsrb_class",
            "instruction",
        ])?;
        Ok(Self {
            records,
            finished: false,
        })
    }
}

impl HistoryWriter for CsvWriter {
    fn write_records(&mut self, records: &[Classification]) -> ExportResult<()> {
        for r in records {
            self.records.write_record(&[
                r.unix_time_secs.to_string(),
                r.sign_name.clone(),
                r.category.label().to_string(),
                r.confidence.to_string(),
                r.warning_level.as_str().to_string(),
                r.german_gtsrb_class.0.to_string(),
                r.instruction.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> ExportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.records.flush()?;
        Ok(())
    }
}
