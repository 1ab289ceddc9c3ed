use anyhow::Context;
use clap::Parser;
use phone_extract::{Cli, OutputFormatter, PhoneExtractError, PhoneExtractor};
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();

    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let extractor = match PhoneExtractor::from_cli(&cli) {
        Ok(extractor) => extractor,
        Err(e) => {
            print_startup_error(&cli, &e);
            return e.exit_code();
        }
    };

    let input_path = match cli.input_path.as_ref() {
        Some(path) => path,
        None => {
            extractor
                .output_formatter()
                .error("An input path (file or directory) is required");
            return 2;
        }
    };

    if cli.dry_run {
        return handle_dry_run(&extractor, input_path);
    }

    match extractor.run(input_path) {
        Ok(report) => {
            extractor.output_formatter().print_run_report(&report);
            0
        }
        Err(e) => {
            extractor.handle_error(&e);
            e.exit_code()
        }
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("phone-extract.toml"));

    let result = PhoneExtractor::generate_sample_config(&config_path)
        .with_context(|| format!("Failed to generate configuration file {}", config_path.display()));

    match result {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path.display());
            println!("\nTo use this configuration:");
            println!("  phone-extract <input-path> --config {}", config_path.display());
            0
        }
        Err(e) => {
            eprintln!("{:#}", e);
            1
        }
    }
}

fn handle_dry_run(extractor: &PhoneExtractor, input_path: &Path) -> i32 {
    let formatter = extractor.output_formatter();
    let config = extractor.config();

    formatter.info("DRY RUN MODE - No files will be read or written");
    formatter.print_separator();

    let input = match extractor.discover(input_path) {
        Ok(input) => input,
        Err(e) => {
            extractor.handle_error(&e);
            return e.exit_code();
        }
    };

    if input.is_directory() {
        formatter.files_discovered(input.files().len());
    }
    for file in input.files() {
        formatter.info(&format!("{} ({})", file.display_path(), file.format.as_str()));
    }

    formatter.print_separator();
    formatter.info(&format!("Sheet: {}", config.input.sheet_name));
    formatter.info(&format!("Column: {}", config.input.column));
    formatter.info(&format!("Output: {}", config.output.path.display()));
    formatter.success("Dry run completed successfully");

    0
}

fn print_startup_error(cli: &Cli, error: &PhoneExtractError) {
    let formatter = OutputFormatter::new(cli.output_mode(), 0, false);
    formatter.print_user_friendly_error(error);
}
