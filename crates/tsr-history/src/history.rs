//! The in-session scan log.
//!
//! Ordered and append-only within a session; `clear` is the only removal.
//! There is no load path — persistence stays out of scope, and export is a
//! one-shot emission of whatever the session accumulated.

use tsr_classify::Classification;

use crate::writer::HistoryWriter;
use crate::ExportResult;

/// Ordered log of classification records for one session.
#[derive(Default)]
pub struct ScanHistory {
    records: Vec<Classification>,
}

impl ScanHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the end of the log.
    pub fn push(&mut self, record: Classification) {
        self.records.push(record);
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[Classification] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Classification> {
        self.records.iter()
    }

    /// Emit the whole log through `writer`, then finish it.
    pub fn export<W: HistoryWriter>(&self, writer: &mut W) -> ExportResult<()> {
        writer.write_records(&self.records)?;
        writer.finish()
    }

    /// Headline numbers for the history panel.
    pub fn stats(&self) -> HistoryStats {
        let total_scans = self.records.len();
        if total_scans == 0 {
            return HistoryStats {
                total_scans:    0,
                avg_confidence: 0.0,
                most_common:    None,
            };
        }

        let sum: f64 = self.records.iter().map(|r| r.confidence).sum();
        let avg_confidence = (sum / total_scans as f64 * 10.0).round() / 10.0;

        // Counted in insertion order so a tie resolves to the name that
        // entered the log first.
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for r in &self.records {
            match counts.iter_mut().find(|(name, _)| *name == r.sign_name) {
                Some((_, n)) => *n += 1,
                None => counts.push((r.sign_name.as_str(), 1)),
            }
        }
        let max = counts.iter().map(|&(_, n)| n).max().unwrap_or(0);
        let most_common = counts
            .iter()
            .find(|&&(_, n)| n == max)
            .map(|&(name, _)| name.to_string());

        HistoryStats {
            total_scans,
            avg_confidence,
            most_common,
        }
    }
}

/// Summary statistics over a [`ScanHistory`].
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryStats {
    pub total_scans: usize,
    /// Mean primary confidence in percent, rounded to one decimal.
    /// Zero for an empty log.
    pub avg_confidence: f64,
    /// Most frequently scanned sign name, `None` for an empty log.
    pub most_common: Option<String>,
}
