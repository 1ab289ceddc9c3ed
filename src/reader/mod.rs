pub mod table;
pub mod workbook;

pub use table::{Cell, Column, SheetTable};
pub use workbook::{load_sheet, SheetSource, WorkbookFormat, XlsSource, XlsxSource};
