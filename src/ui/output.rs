use crate::error::{PhoneExtractError, UserFriendlyError};
use crate::extractor::RunReport;
use console::{style, Emoji, Term};
use serde_json;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

// Emojis with text fallbacks
static CHECKMARK: Emoji = Emoji("✅ ", "✓ ");
static CROSS: Emoji = Emoji("❌ ", "✗ ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");
static WARNING: Emoji = Emoji("⚠️  ", "! ");
static SEARCH: Emoji = Emoji("🔍 ", "> ");
static CHART: Emoji = Emoji("📊 ", "# ");

pub struct OutputFormatter {
    mode: OutputMode,
    use_colors: bool,
    verbose_level: u8,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let use_colors = match mode {
            OutputMode::Human => Term::stdout().features().colors_supported() && !quiet,
            _ => false,
        };

        Self {
            mode,
            use_colors,
            verbose_level: if quiet { 0 } else { verbose },
            quiet,
        }
    }

    // Core messaging methods
    pub fn success(&self, message: &str) {
        if self.should_show_message(0) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Success, message),
                OutputMode::Json => self.print_json_message("success", message),
                OutputMode::Plain => println!("SUCCESS: {}", message),
            }
        }
    }

    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Error, message),
            OutputMode::Json => self.print_json_message("error", message),
            OutputMode::Plain => eprintln!("ERROR: {}", message),
        }
    }

    pub fn warning(&self, message: &str) {
        if self.should_show_message(0) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Warning, message),
                OutputMode::Json => self.print_json_message("warning", message),
                OutputMode::Plain => println!("WARNING: {}", message),
            }
        }
    }

    pub fn info(&self, message: &str) {
        if self.should_show_message(0) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Info, message),
                OutputMode::Json => self.print_json_message("info", message),
                OutputMode::Plain => println!("INFO: {}", message),
            }
        }
    }

    pub fn debug(&self, message: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("  {}", style(message).dim());
                    } else {
                        println!("  DEBUG: {}", message);
                    }
                }
                OutputMode::Json => self.print_json_message("debug", message),
                OutputMode::Plain => println!("DEBUG: {}", message),
            }
        }
    }

    // Run progress
    pub fn files_discovered(&self, count: usize) {
        let message = format!("Found {} Excel files to process", count);
        self.print_tagged(&SEARCH, "files_discovered", &message);
    }

    pub fn file_extracted(&self, filename: &str, count: usize) {
        let message = format!("Extracted {} phone numbers from {}", count, filename);
        self.print_tagged(&CHART, "file_extracted", &message);
    }

    pub fn print_verification(&self, duplicates_detected: bool) {
        let message = verification_message(duplicates_detected);
        if duplicates_detected {
            self.warning(message);
        } else {
            self.success(message);
        }
    }

    pub fn print_user_friendly_error(&self, error: &PhoneExtractError) {
        self.error(&error.user_message());

        if let Some(suggestion) = error.suggestion() {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        eprintln!(
                            "{}{}",
                            INFO,
                            style(&format!("Suggestion: {}", suggestion)).cyan()
                        );
                    } else {
                        eprintln!("Suggestion: {}", suggestion);
                    }
                }
                OutputMode::Json => {
                    self.print_json_object(&serde_json::json!({
                        "type": "suggestion",
                        "message": suggestion
                    }));
                }
                OutputMode::Plain => {
                    eprintln!("SUGGESTION: {}", suggestion);
                }
            }
        }
    }

    // Summary and reporting
    pub fn print_run_report(&self, report: &RunReport) {
        match self.mode {
            OutputMode::Human => {
                if !self.quiet {
                    self.print_human_report(report);
                }
            }
            OutputMode::Json => {
                let json_output =
                    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string());
                println!("{}", json_output);
            }
            OutputMode::Plain => {
                if !self.quiet {
                    self.print_plain_report(report);
                }
            }
        }
    }

    pub fn print_separator(&self) {
        if self.quiet {
            return;
        }

        match self.mode {
            OutputMode::Human => {
                if self.use_colors {
                    println!("{}", style("─".repeat(60)).dim());
                } else {
                    println!("{}", "-".repeat(60));
                }
            }
            OutputMode::Plain => {
                println!("{}", "-".repeat(60));
            }
            OutputMode::Json => {}
        }
    }

    // Private helper methods
    fn should_show_message(&self, min_verbose_level: u8) -> bool {
        !self.quiet && self.verbose_level >= min_verbose_level
    }

    fn print_tagged(&self, emoji: &Emoji, event: &str, message: &str) {
        if !self.should_show_message(0) {
            return;
        }

        match self.mode {
            OutputMode::Human => println!("{}{}", emoji, message),
            OutputMode::Json => self.print_json_message(event, message),
            OutputMode::Plain => println!("INFO: {}", message),
        }
    }

    fn print_human_message(&self, msg_type: MessageType, message: &str) {
        #[allow(clippy::type_complexity)]
        let (emoji, color_fn): (&Emoji, Box<dyn Fn(&str) -> console::StyledObject<&str>>) =
            match msg_type {
                MessageType::Success => (&CHECKMARK, Box::new(|msg| style(msg).green().bold())),
                MessageType::Error => (&CROSS, Box::new(|msg| style(msg).red().bold())),
                MessageType::Warning => (&WARNING, Box::new(|msg| style(msg).yellow().bold())),
                MessageType::Info => (&INFO, Box::new(|msg| style(msg).cyan())),
            };

        if self.use_colors {
            match msg_type {
                MessageType::Error => eprintln!("{}{}", emoji, color_fn(message)),
                _ => println!("{}{}", emoji, color_fn(message)),
            }
        } else {
            let prefix = match msg_type {
                MessageType::Success => "✓",
                MessageType::Error => "✗",
                MessageType::Warning => "!",
                MessageType::Info => "i",
            };

            match msg_type {
                MessageType::Error => eprintln!("{} {}", prefix, message),
                _ => println!("{} {}", prefix, message),
            }
        }
    }

    fn print_json_message(&self, level: &str, message: &str) {
        self.print_json_object(&serde_json::json!({
            "type": "message",
            "level": level,
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }));
    }

    fn print_json_object(&self, obj: &serde_json::Value) {
        println!(
            "{}",
            serde_json::to_string(obj).unwrap_or_else(|_| "{}".to_string())
        );
    }

    fn highlight(&self, value: String) -> String {
        if self.use_colors {
            style(value).cyan().bold().to_string()
        } else {
            value
        }
    }

    fn print_human_report(&self, report: &RunReport) {
        let stats = &report.statistics;

        println!();
        self.print_separator();
        println!("{}DEDUPLICATION SUMMARY:", CHART);
        println!(
            "   Files processed: {}",
            self.highlight(stats.files_processed.to_string())
        );
        if stats.files_failed > 0 {
            println!(
                "   Files failed: {}",
                self.highlight(stats.files_failed.to_string())
            );
        }
        if let Some(rate) = stats.deduplication_rate() {
            println!(
                "   Total raw entries: {}",
                self.highlight(format_count(stats.raw_entries))
            );
            println!(
                "   Duplicates removed: {}",
                self.highlight(format_count(stats.duplicates_removed()))
            );
            println!(
                "   Deduplication rate: {}",
                self.highlight(format_percentage(rate))
            );
        }
        println!(
            "{}Final unique phone numbers: {}",
            CHECKMARK,
            self.highlight(format_count(stats.unique_numbers))
        );
        println!(
            "{}Saved to: {}",
            CHECKMARK,
            report.output_path.display()
        );
        self.print_separator();
    }

    fn print_plain_report(&self, report: &RunReport) {
        let stats = &report.statistics;

        println!("DEDUPLICATION SUMMARY:");
        println!("Files processed: {}", stats.files_processed);
        if stats.files_failed > 0 {
            println!("Files failed: {}", stats.files_failed);
        }
        if let Some(rate) = stats.deduplication_rate() {
            println!("Total raw entries: {}", format_count(stats.raw_entries));
            println!(
                "Duplicates removed: {}",
                format_count(stats.duplicates_removed())
            );
            println!("Deduplication rate: {}", format_percentage(rate));
        }
        println!(
            "Final unique phone numbers: {}",
            format_count(stats.unique_numbers)
        );
        println!("Saved to: {}", report.output_path.display());
    }
}

#[derive(Debug, Clone, Copy)]
enum MessageType {
    Success,
    Error,
    Warning,
    Info,
}

/// Group digits in threes with commas, e.g. `1234567` -> `1,234,567`.
pub fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

// The level prefix comes from `warning`/`success`, never from the text.
fn verification_message(duplicates_detected: bool) -> &'static str {
    if duplicates_detected {
        "Duplicates detected in final output!"
    } else {
        "Verification: No duplicates in final output"
    }
}

pub fn format_percentage(rate: f64) -> String {
    format!("{:.1}%", rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_creation() {
        let formatter = OutputFormatter::new(OutputMode::Plain, 1, false);
        assert_eq!(formatter.mode, OutputMode::Plain);
        assert_eq!(formatter.verbose_level, 1);
        assert!(!formatter.use_colors);
    }

    #[test]
    fn test_quiet_mode() {
        let formatter = OutputFormatter::new(OutputMode::Human, 2, true);
        assert_eq!(formatter.verbose_level, 0);
        assert!(formatter.quiet);
        assert!(!formatter.should_show_message(0));
    }

    #[test]
    fn test_should_show_message() {
        let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
        assert!(formatter.should_show_message(0));
        assert!(!formatter.should_show_message(1));

        let verbose = OutputFormatter::new(OutputMode::Human, 1, false);
        assert!(verbose.should_show_message(1));
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(123456), "123,456");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(37.5), "37.5%");
        assert_eq!(format_percentage(33.333), "33.3%");
        assert_eq!(format_percentage(0.0), "0.0%");
    }

    #[test]
    fn test_verification_messages_carry_no_level_prefix() {
        assert_eq!(
            verification_message(true),
            "Duplicates detected in final output!"
        );
        assert!(!verification_message(true).contains("WARNING"));
        assert!(verification_message(false).starts_with("Verification:"));
    }
}
