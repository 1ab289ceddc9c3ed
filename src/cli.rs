use crate::config::{CliOverrides, Config};
use crate::error::Result;
use crate::ui::OutputMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phone-extract")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract unique phone numbers from Excel file(s).")]
#[command(
    long_about = "Reads the MSISDN column of the 'Sheet0' sheet from one spreadsheet or every \
                  .xlsx/.xls file in a directory, removes duplicates and writes the sorted \
                  numbers to a CSV file."
)]
#[command(after_help = "EXAMPLES:\n  \
    phone-extract exports/subscribers.xlsx\n  \
    phone-extract exports/ --output numbers.csv\n  \
    phone-extract exports/ --column Phone --sheet Data --output-format json")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Path to the Excel file or directory containing Excel files
    pub input_path: Option<PathBuf>,

    /// Output CSV file name (default: unique_phone_numbers.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Sheet to read from every workbook
    #[arg(long, help = "Sheet name to read (default: Sheet0)")]
    pub sheet: Option<String>,

    /// Column holding the phone numbers
    #[arg(long, help = "Column name to extract (default: MSISDN)")]
    pub column: Option<String>,

    /// Remove every `.0` occurrence instead of only a trailing one
    #[arg(long, help = "Strip '.0' anywhere in a value, matching older outputs")]
    pub legacy_decimal_trim: bool,

    /// Output format for console messages
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Dry run (list the files that would be read)
    #[arg(long, help = "Show which files would be processed without reading them")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl From<&OutputFormat> for OutputMode {
    fn from(format: &OutputFormat) -> Self {
        match format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        }
    }
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_output_path(self.output.clone())
            .with_sheet_name(self.sheet.clone())
            .with_column(self.column.clone())
            .with_legacy_decimal_trim(self.legacy_decimal_trim)
    }

    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from(&self.output_format)
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
