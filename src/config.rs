use crate::error::{PhoneExtractError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SHEET_NAME: &str = "Sheet0";
pub const DEFAULT_COLUMN: &str = "MSISDN";
pub const DEFAULT_OUTPUT_PATH: &str = "unique_phone_numbers.csv";
pub const DEFAULT_OUTPUT_HEADER: &str = "Phone Number";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub cleaning: CleaningConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    pub sheet_name: String,
    pub column: String,
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CleaningConfig {
    pub decimal_artifact: DecimalArtifact,
}

/// How the `.0` left behind by float-typed cells is removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DecimalArtifact {
    /// Strip a single trailing `.0`.
    #[default]
    Suffix,
    /// Remove every occurrence of `.0`, wherever it appears.
    Anywhere,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub header: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            column: DEFAULT_COLUMN.to_string(),
            extensions: vec!["xlsx".to_string(), "xls".to_string()],
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            header: DEFAULT_OUTPUT_HEADER.to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PhoneExtractError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| PhoneExtractError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| PhoneExtractError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["phone-extract.toml", ".phone-extract.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref output_path) = cli_args.output_path {
            self.output.path = output_path.clone();
        }

        if let Some(ref sheet) = cli_args.sheet_name {
            self.input.sheet_name = sheet.clone();
        }

        if let Some(ref column) = cli_args.column {
            self.input.column = column.clone();
        }

        if cli_args.legacy_decimal_trim {
            self.cleaning.decimal_artifact = DecimalArtifact::Anywhere;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.input.sheet_name.trim().is_empty() {
            return Err(PhoneExtractError::Config {
                message: "Sheet name must not be empty".to_string(),
            });
        }

        if self.input.column.trim().is_empty() {
            return Err(PhoneExtractError::Config {
                message: "Column name must not be empty".to_string(),
            });
        }

        if self.input.extensions.iter().all(|e| e.trim().is_empty()) {
            return Err(PhoneExtractError::Config {
                message: "At least one spreadsheet extension must be specified".to_string(),
            });
        }

        if self.output.header.is_empty() {
            return Err(PhoneExtractError::Config {
                message: "Output header must not be empty".to_string(),
            });
        }

        if self.output.path.as_os_str().is_empty() {
            return Err(PhoneExtractError::Config {
                message: "Output path must not be empty".to_string(),
            });
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub output_path: Option<PathBuf>,
    pub sheet_name: Option<String>,
    pub column: Option<String>,
    pub legacy_decimal_trim: bool,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_path(mut self, output_path: Option<PathBuf>) -> Self {
        self.output_path = output_path;
        self
    }

    pub fn with_sheet_name(mut self, sheet_name: Option<String>) -> Self {
        self.sheet_name = sheet_name;
        self
    }

    pub fn with_column(mut self, column: Option<String>) -> Self {
        self.column = column;
        self
    }

    pub fn with_legacy_decimal_trim(mut self, legacy: bool) -> Self {
        self.legacy_decimal_trim = legacy;
        self
    }
}
