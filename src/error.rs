use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhoneExtractError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read spreadsheet {path}: {message}")]
    Spreadsheet { path: String, message: String },

    #[error("Sheet '{sheet}' not found in {path}")]
    SheetNotFound { path: String, sheet: String },

    #[error("Column '{column}' not found in sheet of {path}")]
    MissingColumn { path: String, column: String },

    #[error("Input path does not exist: {path}")]
    InputNotFound { path: String },

    #[error("No spreadsheet files found in directory: {path}")]
    NoSpreadsheetsFound { path: String },

    #[error("No phone numbers extracted")]
    NoPhoneNumbers,

    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl PhoneExtractError {
    /// Errors that only affect a single input file; the run continues past them.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            PhoneExtractError::Spreadsheet { .. }
                | PhoneExtractError::SheetNotFound { .. }
                | PhoneExtractError::MissingColumn { .. }
        )
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            PhoneExtractError::InputNotFound { .. } => 3,
            PhoneExtractError::NoSpreadsheetsFound { .. } => 4,
            PhoneExtractError::NoPhoneNumbers => 5,
            _ => 1,
        }
    }
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for PhoneExtractError {
    fn user_message(&self) -> String {
        match self {
            PhoneExtractError::Spreadsheet { path, message } => {
                format!("Error reading Excel file {}: {}", path, message)
            }
            PhoneExtractError::SheetNotFound { path, sheet } => {
                format!("Error reading Excel file {}: sheet '{}' not found", path, sheet)
            }
            PhoneExtractError::MissingColumn { path, column } => {
                format!("Column '{}' not found in Excel sheet: {}", column, path)
            }
            PhoneExtractError::InputNotFound { path } => {
                format!("Input path does not exist: {}", path)
            }
            PhoneExtractError::NoSpreadsheetsFound { path } => {
                format!("No Excel files found in directory: {}", path)
            }
            PhoneExtractError::NoPhoneNumbers => "No phone numbers extracted".to_string(),
            PhoneExtractError::Csv(e) => format!("Failed to write CSV output: {}", e),
            PhoneExtractError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            PhoneExtractError::InputNotFound { .. } => Some(
                "Check the path; it must point to a spreadsheet file or a directory of .xlsx/.xls files.".to_string()
            ),
            PhoneExtractError::NoSpreadsheetsFound { .. } => Some(
                "Only files ending in the configured extensions (default: .xlsx, .xls) are processed; subdirectories are not scanned.".to_string()
            ),
            PhoneExtractError::NoPhoneNumbers => Some(
                "Make sure the workbooks contain the expected sheet and column, or pass --sheet/--column to match your files.".to_string()
            ),
            PhoneExtractError::Config { .. } => Some(
                "Check your configuration file syntax; run with --generate-config for a sample.".to_string()
            ),
            PhoneExtractError::Csv(_) => Some(
                "Ensure the output directory exists and is writable, or choose another path with --output.".to_string()
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for PhoneExtractError {
    fn from(error: toml::de::Error) -> Self {
        PhoneExtractError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PhoneExtractError>;
