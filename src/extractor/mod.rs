pub mod accumulator;
pub mod column_extractor;
pub mod csv_output;

pub use accumulator::{has_duplicates, PhoneAccumulator, RunReport, RunStatistics};
pub use column_extractor::{normalize_phone, ColumnExtractor, FileExtraction};
pub use csv_output::write_phone_csv;
