//! The `HistoryWriter` trait implemented by export backends.

use tsr_classify::Classification;

use crate::ExportResult;

/// Trait implemented by the JSON and CSV exporters.
pub trait HistoryWriter {
    /// Write a batch of classification records.
    fn write_records(&mut self, records: &[Classification]) -> ExportResult<()>;

    /// Flush and close the underlying file handle.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> ExportResult<()>;
}
