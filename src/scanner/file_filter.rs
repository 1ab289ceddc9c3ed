use crate::config::InputConfig;
use std::path::Path;

/// Decides which directory entries are spreadsheets worth opening.
pub struct SpreadsheetFilter {
    suffixes: Vec<String>,
}

impl SpreadsheetFilter {
    pub fn new(config: &InputConfig) -> Self {
        Self::with_extensions(&config.extensions)
    }

    pub fn with_extensions<S: AsRef<str>>(extensions: &[S]) -> Self {
        let suffixes = extensions
            .iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.'))
            .filter(|ext| !ext.is_empty())
            .map(|ext| format!(".{}", ext))
            .collect();

        Self { suffixes }
    }

    /// Match on the literal end of the file name, case-sensitively.
    pub fn is_spreadsheet(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.suffixes.iter().any(|suffix| name.ends_with(suffix)))
    }
}

impl Default for SpreadsheetFilter {
    fn default() -> Self {
        Self::new(&InputConfig::default())
    }
}
