//! JSON export backend.
//!
//! Emits the full record list as one pretty-printed array in the camelCase
//! wire form, matching the shape the record type serializes to everywhere.
//! A JSON array has to be written whole, so records buffer until `finish`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tsr_classify::Classification;

use crate::writer::HistoryWriter;
use crate::ExportResult;

/// Writes the scan history to one JSON file.
pub struct JsonWriter {
    out:      File,
    buffered: Vec<Classification>,
    finished: bool,
}

impl JsonWriter {
    /// Create (or truncate) `path`.  Nothing is written until `finish`.
    pub fn new(path: &Path) -> ExportResult<Self> {
        Ok(Self {
            out:      File::create(path)?,
            buffered: Vec::new(),
            finished: false,
        })
    }
}

impl HistoryWriter for JsonWriter {
    fn write_records(&mut self, records: &[Classification]) -> ExportResult<()> {
        self.buffered.extend_from_slice(records);
        Ok(())
    }

    fn finish(&mut self) -> ExportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        serde_json::to_writer_pretty(&mut self.out, &self.buffered)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}
