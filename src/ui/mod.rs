pub mod output;
pub mod progress;

pub use output::{format_count, OutputFormatter, OutputMode};
pub use progress::ProgressManager;
