use crate::extractor::column_extractor::FileExtraction;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;

/// Counters describing a finished run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunStatistics {
    pub files_processed: usize,
    pub files_failed: usize,
    pub raw_entries: usize,
    pub extracted_entries: usize,
    pub unique_numbers: usize,
}

impl RunStatistics {
    pub fn duplicates_removed(&self) -> usize {
        self.raw_entries.saturating_sub(self.unique_numbers)
    }

    /// Percentage of raw entries dropped; `None` when no raw entries were counted.
    pub fn deduplication_rate(&self) -> Option<f64> {
        if self.raw_entries == 0 {
            None
        } else {
            Some(self.duplicates_removed() as f64 / self.raw_entries as f64 * 100.0)
        }
    }
}

/// Everything reported once the CSV has been written.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub statistics: RunStatistics,
    pub duplicates_detected: bool,
    pub completed_at: DateTime<Utc>,
}

/// Collects per-file results into the global unique set.
#[derive(Debug, Default)]
pub struct PhoneAccumulator {
    numbers: HashSet<String>,
    files_processed: usize,
    files_failed: usize,
    raw_entries: usize,
    extracted_entries: usize,
}

impl PhoneAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(&mut self, extraction: FileExtraction) {
        self.files_processed += 1;
        self.raw_entries += extraction.raw_entries;
        self.extracted_entries += extraction.extracted_entries;
        self.numbers.extend(extraction.numbers);
    }

    /// A file that could not be read still counts as processed.
    pub fn record_failure(&mut self) {
        self.files_processed += 1;
        self.files_failed += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn finalize(self) -> (Vec<String>, RunStatistics) {
        let mut sorted: Vec<String> = self.numbers.into_iter().collect();
        sorted.sort();

        let statistics = RunStatistics {
            files_processed: self.files_processed,
            files_failed: self.files_failed,
            raw_entries: self.raw_entries,
            extracted_entries: self.extracted_entries,
            unique_numbers: sorted.len(),
        };

        (sorted, statistics)
    }
}

/// Checks a sorted sequence for adjacent equal entries.
pub fn has_duplicates(sorted: &[String]) -> bool {
    sorted.windows(2).any(|pair| pair[0] == pair[1])
}
