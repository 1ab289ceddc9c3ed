use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct ProgressManager {
    enabled: bool,
}

impl ProgressManager {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn create_file_progress(&self, total_files: u64) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total_files);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>4}/{len:4} files {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Run `f` with the bar temporarily cleared so printed lines are not overdrawn.
pub fn suspend_for<F, R>(pb: &ProgressBar, f: F) -> R
where
    F: FnOnce() -> R,
{
    if pb.is_hidden() {
        f()
    } else {
        pb.suspend(f)
    }
}

pub fn update_file_progress(pb: &ProgressBar, filename: &str) {
    pb.set_message(filename.to_string());
    pb.inc(1);
}

pub fn finish_progress(pb: &ProgressBar) {
    if !pb.is_hidden() {
        pb.finish_and_clear();
    }
}
