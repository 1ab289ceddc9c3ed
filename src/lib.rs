pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod reader;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CleaningConfig, CliOverrides, Config, DecimalArtifact, InputConfig, OutputConfig};
pub use error::{PhoneExtractError, Result, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{
    ColumnExtractor, FileExtraction, PhoneAccumulator, RunReport, RunStatistics,
};
pub use reader::{load_sheet, Cell, SheetSource, SheetTable, WorkbookFormat};
pub use scanner::{InputScanner, InputSet, SpreadsheetFile, SpreadsheetFilter};
pub use ui::{OutputFormatter, OutputMode, ProgressManager};

use std::path::Path;

/// Main library interface: one extraction run from input discovery to CSV.
pub struct PhoneExtractor {
    config: Config,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
}

impl PhoneExtractor {
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        let progress_manager = ProgressManager::new(!quiet && output_mode == OutputMode::Human);

        Self {
            config,
            output_formatter,
            progress_manager,
        }
    }

    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;

        Ok(Self::new(
            config,
            cli_args.output_mode(),
            cli_args.verbosity_level(),
            cli_args.quiet,
        ))
    }

    /// Resolve the input path without reading any workbook.
    pub fn discover<P: AsRef<Path>>(&self, input_path: P) -> Result<InputSet> {
        InputScanner::new(&self.config.input).discover(input_path)
    }

    /// Run the whole pipeline: discover, read and extract each file, merge,
    /// verify, write the CSV. Nothing is written when a fatal error occurs.
    pub fn run<P: AsRef<Path>>(&self, input_path: P) -> Result<RunReport> {
        let input_path = input_path.as_ref();
        let input = self.discover(input_path)?;

        if input.is_directory() {
            self.output_formatter.files_discovered(input.files().len());
        }

        let accumulator = self.process_files(input.files())?;

        if accumulator.is_empty() {
            return Err(PhoneExtractError::NoPhoneNumbers);
        }

        let (sorted, statistics) = accumulator.finalize();

        let duplicates_detected = extractor::has_duplicates(&sorted);
        self.output_formatter.print_verification(duplicates_detected);

        let output_path = self.config.output.path.clone();
        extractor::write_phone_csv(&output_path, &self.config.output.header, &sorted)?;
        self.output_formatter
            .debug(&format!("Wrote {} rows to {}", sorted.len(), output_path.display()));

        Ok(RunReport {
            input_path: input_path.to_path_buf(),
            output_path,
            statistics,
            duplicates_detected,
            completed_at: chrono::Utc::now(),
        })
    }

    /// Per-file errors are reported and the run moves on; anything else aborts it.
    fn process_files(&self, files: &[SpreadsheetFile]) -> Result<PhoneAccumulator> {
        let extractor = ColumnExtractor::from_config(&self.config);
        let mut accumulator = PhoneAccumulator::new();

        let pb = self.progress_manager.create_file_progress(files.len() as u64);

        for file in files {
            let result = ui::progress::suspend_for(&pb, || {
                self.output_formatter
                    .debug(&format!("Processing {}", file.display_path()));
                self.extract_file(&extractor, file)
            });

            match result {
                Ok(extraction) => {
                    ui::progress::suspend_for(&pb, || {
                        self.output_formatter
                            .file_extracted(&file.filename, extraction.extracted_entries);
                    });
                    accumulator.merge(extraction);
                }
                Err(e @ PhoneExtractError::MissingColumn { .. }) => {
                    ui::progress::suspend_for(&pb, || {
                        self.output_formatter.warning(&e.user_message());
                    });
                    accumulator.merge(FileExtraction::empty());
                }
                Err(e) if e.is_per_file() => {
                    ui::progress::suspend_for(&pb, || {
                        self.output_formatter.error(&e.user_message());
                    });
                    accumulator.record_failure();
                }
                Err(e) => {
                    pb.abandon();
                    return Err(e);
                }
            }

            ui::progress::update_file_progress(&pb, &file.filename);
        }

        ui::progress::finish_progress(&pb);
        Ok(accumulator)
    }

    fn extract_file(
        &self,
        extractor: &ColumnExtractor,
        file: &SpreadsheetFile,
    ) -> Result<FileExtraction> {
        let table = file
            .format
            .source()
            .load_sheet(&file.path, &self.config.input.sheet_name)?;
        extractor.extract(table, &file.path)
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config)?;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    pub fn handle_error(&self, error: &PhoneExtractError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
