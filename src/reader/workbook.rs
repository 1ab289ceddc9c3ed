use crate::error::{PhoneExtractError, Result};
use crate::reader::table::{Cell, SheetTable};
use calamine::{open_workbook, Reader, Xls, Xlsx};
use std::fmt::Display;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Loads one named sheet of a workbook as a table of named columns.
pub trait SheetSource {
    fn load_sheet(&self, path: &Path, sheet_name: &str) -> Result<SheetTable>;
}

/// Legacy binary workbooks (`.xls`).
pub struct XlsSource;

/// Office Open XML workbooks (`.xlsx` and anything not recognised as legacy).
pub struct XlsxSource;

impl SheetSource for XlsSource {
    fn load_sheet(&self, path: &Path, sheet_name: &str) -> Result<SheetTable> {
        read_sheet::<Xls<BufReader<File>>>(path, sheet_name)
    }
}

impl SheetSource for XlsxSource {
    fn load_sheet(&self, path: &Path, sheet_name: &str) -> Result<SheetTable> {
        read_sheet::<Xlsx<BufReader<File>>>(path, sheet_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbookFormat {
    Xls,
    Xlsx,
}

impl WorkbookFormat {
    /// Files ending in `.xls` use the legacy decoder, everything else the OOXML one.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        if name.ends_with(".xls") {
            WorkbookFormat::Xls
        } else {
            WorkbookFormat::Xlsx
        }
    }

    pub fn source(&self) -> &'static dyn SheetSource {
        match self {
            WorkbookFormat::Xls => &XlsSource,
            WorkbookFormat::Xlsx => &XlsxSource,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkbookFormat::Xls => "xls",
            WorkbookFormat::Xlsx => "xlsx",
        }
    }
}

/// Read `sheet_name` from the workbook at `path`, picking the decoder by extension.
pub fn load_sheet(path: &Path, sheet_name: &str) -> Result<SheetTable> {
    WorkbookFormat::from_path(path)
        .source()
        .load_sheet(path, sheet_name)
}

// The workbook handle is dropped before returning, so only one file is open at a time.
fn read_sheet<R>(path: &Path, sheet_name: &str) -> Result<SheetTable>
where
    R: Reader<BufReader<File>>,
    R::Error: Display,
{
    let mut workbook: R = open_workbook(path).map_err(|e| spreadsheet_error(path, e))?;

    if !workbook.sheet_names().iter().any(|name| name == sheet_name) {
        return Err(PhoneExtractError::SheetNotFound {
            path: path.display().to_string(),
            sheet: sheet_name.to_string(),
        });
    }

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|e| spreadsheet_error(path, e))?;

    Ok(SheetTable::from_rows(
        range
            .rows()
            .map(|row| row.iter().map(Cell::from).collect::<Vec<_>>()),
    ))
}

fn spreadsheet_error<E: Display>(path: &Path, error: E) -> PhoneExtractError {
    PhoneExtractError::Spreadsheet {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}
