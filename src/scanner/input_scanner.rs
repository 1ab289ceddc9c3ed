use crate::config::InputConfig;
use crate::error::{PhoneExtractError, Result};
use crate::reader::WorkbookFormat;
use crate::scanner::file_filter::SpreadsheetFilter;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq)]
pub struct SpreadsheetFile {
    pub path: PathBuf,
    pub filename: String,
    pub format: WorkbookFormat,
}

impl SpreadsheetFile {
    pub fn new(path: PathBuf) -> Self {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();
        let format = WorkbookFormat::from_path(&path);

        Self {
            path,
            filename,
            format,
        }
    }

    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

/// What the input path resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSet {
    SingleFile(SpreadsheetFile),
    Directory(Vec<SpreadsheetFile>),
}

impl InputSet {
    pub fn files(&self) -> &[SpreadsheetFile] {
        match self {
            InputSet::SingleFile(file) => std::slice::from_ref(file),
            InputSet::Directory(files) => files,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, InputSet::Directory(_))
    }
}

pub struct InputScanner {
    filter: SpreadsheetFilter,
}

impl InputScanner {
    pub fn new(config: &InputConfig) -> Self {
        Self {
            filter: SpreadsheetFilter::new(config),
        }
    }

    /// Resolve `input` to a single file or the spreadsheets directly inside a directory.
    ///
    /// A single file is taken as-is whatever its extension. Directory entries
    /// are listed once, non-recursively, ordered by file name.
    pub fn discover<P: AsRef<Path>>(&self, input: P) -> Result<InputSet> {
        let input = input.as_ref();

        if input.is_file() {
            return Ok(InputSet::SingleFile(SpreadsheetFile::new(input.to_path_buf())));
        }

        if !input.is_dir() {
            return Err(PhoneExtractError::InputNotFound {
                path: input.display().to_string(),
            });
        }

        let files: Vec<SpreadsheetFile> = WalkDir::new(input)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| self.filter.is_spreadsheet(entry.path()))
            .map(|entry| SpreadsheetFile::new(entry.into_path()))
            .collect();

        if files.is_empty() {
            return Err(PhoneExtractError::NoSpreadsheetsFound {
                path: input.display().to_string(),
            });
        }

        Ok(InputSet::Directory(files))
    }
}
