use crate::config::{Config, DecimalArtifact};
use crate::error::{PhoneExtractError, Result};
use crate::reader::SheetTable;
use std::collections::HashSet;
use std::path::Path;

/// Stringified value that stands for a missing number and is never kept.
const NAN_SENTINEL: &str = "nan";
const DECIMAL_ARTIFACT: &str = ".0";

/// Result of pulling the phone column out of one file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileExtraction {
    /// Non-missing cells in the column, before any filtering or dedup.
    pub raw_entries: usize,
    /// Values kept after cleaning, before dedup.
    pub extracted_entries: usize,
    pub numbers: HashSet<String>,
}

impl FileExtraction {
    pub fn empty() -> Self {
        Self::default()
    }
}

pub struct ColumnExtractor {
    column: String,
    decimal_artifact: DecimalArtifact,
}

impl ColumnExtractor {
    pub fn new<S: Into<String>>(column: S, decimal_artifact: DecimalArtifact) -> Self {
        Self {
            column: column.into(),
            decimal_artifact,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.input.column.clone(), config.cleaning.decimal_artifact)
    }

    /// Normalise column names, find the phone column and collect its cleaned values.
    ///
    /// A table without the column yields `MissingColumn`; callers treat that as
    /// a file contributing zero numbers.
    pub fn extract(&self, mut table: SheetTable, path: &Path) -> Result<FileExtraction> {
        table.normalize_column_names();

        let column = table
            .column(&self.column)
            .ok_or_else(|| PhoneExtractError::MissingColumn {
                path: path.display().to_string(),
                column: self.column.clone(),
            })?;

        let mut extraction = FileExtraction::empty();

        for cell in column.non_missing() {
            extraction.raw_entries += 1;

            let value = cell.to_value_string();
            if value == NAN_SENTINEL {
                continue;
            }

            // Cleaning can leave nothing behind (".0") or expose "nan" ("nan.0").
            let number = normalize_phone(&value, self.decimal_artifact);
            if number.is_empty() || number == NAN_SENTINEL {
                continue;
            }

            extraction.extracted_entries += 1;
            extraction.numbers.insert(number);
        }

        Ok(extraction)
    }
}

pub fn normalize_phone(value: &str, mode: DecimalArtifact) -> String {
    match mode {
        DecimalArtifact::Suffix => value
            .strip_suffix(DECIMAL_ARTIFACT)
            .unwrap_or(value)
            .to_string(),
        DecimalArtifact::Anywhere => value.replace(DECIMAL_ARTIFACT, ""),
    }
}
