pub mod file_filter;
pub mod input_scanner;

pub use file_filter::SpreadsheetFilter;
pub use input_scanner::{InputScanner, InputSet, SpreadsheetFile};
