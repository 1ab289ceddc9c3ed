#![allow(dead_code)]

use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Cell content for generated workbooks.
#[derive(Debug, Clone)]
pub enum Value {
    Text(&'static str),
    Number(f64),
    Blank,
}

pub use Value::{Blank, Number, Text};

const MAIN_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const PKG_REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// Write a minimal single-sheet `.xlsx` workbook to `path`.
pub fn write_xlsx(path: &Path, sheet_name: &str, rows: &[Vec<Value>]) {
    let mut strings: Vec<&str> = Vec::new();
    let mut string_index: HashMap<&str, usize> = HashMap::new();
    let mut sheet_rows = String::new();

    for (row_idx, row) in rows.iter().enumerate() {
        let row_number = row_idx + 1;
        sheet_rows.push_str(&format!("<row r=\"{}\">", row_number));

        for (col_idx, value) in row.iter().enumerate() {
            let reference = format!("{}{}", column_letter(col_idx), row_number);
            match value {
                Value::Text(text) => {
                    let index = *string_index.entry(*text).or_insert_with(|| {
                        strings.push(*text);
                        strings.len() - 1
                    });
                    sheet_rows.push_str(&format!(
                        "<c r=\"{}\" t=\"s\"><v>{}</v></c>",
                        reference, index
                    ));
                }
                Value::Number(number) => {
                    sheet_rows.push_str(&format!("<c r=\"{}\"><v>{}</v></c>", reference, number));
                }
                Value::Blank => {}
            }
        }

        sheet_rows.push_str("</row>");
    }

    let shared_strings: String = strings
        .iter()
        .map(|s| format!("<si><t>{}</t></si>", escape_xml(s)))
        .collect();

    let parts = [
        (
            "[Content_Types].xml",
            String::from(
                "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
                 <Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
                 <Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
                 <Default Extension=\"xml\" ContentType=\"application/xml\"/>\
                 <Override PartName=\"/xl/workbook.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml\"/>\
                 <Override PartName=\"/xl/worksheets/sheet1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml\"/>\
                 <Override PartName=\"/xl/sharedStrings.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml\"/>\
                 </Types>"
            ),
        ),
        (
            "_rels/.rels",
            format!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
                 <Relationships xmlns=\"{}\">\
                 <Relationship Id=\"rId1\" Type=\"{}/officeDocument\" Target=\"xl/workbook.xml\"/>\
                 </Relationships>",
                PKG_REL_NS, REL_NS
            ),
        ),
        (
            "xl/workbook.xml",
            format!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
                 <workbook xmlns=\"{}\" xmlns:r=\"{}\">\
                 <sheets><sheet name=\"{}\" sheetId=\"1\" r:id=\"rId1\"/></sheets>\
                 </workbook>",
                MAIN_NS,
                REL_NS,
                escape_xml(sheet_name)
            ),
        ),
        (
            "xl/_rels/workbook.xml.rels",
            format!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
                 <Relationships xmlns=\"{}\">\
                 <Relationship Id=\"rId1\" Type=\"{}/worksheet\" Target=\"worksheets/sheet1.xml\"/>\
                 <Relationship Id=\"rId2\" Type=\"{}/sharedStrings\" Target=\"sharedStrings.xml\"/>\
                 </Relationships>",
                PKG_REL_NS, REL_NS, REL_NS
            ),
        ),
        (
            "xl/sharedStrings.xml",
            format!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
                 <sst xmlns=\"{}\" count=\"{}\" uniqueCount=\"{}\">{}</sst>",
                MAIN_NS,
                strings.len(),
                strings.len(),
                shared_strings
            ),
        ),
        (
            "xl/worksheets/sheet1.xml",
            format!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
                 <worksheet xmlns=\"{}\" xmlns:r=\"{}\"><sheetData>{}</sheetData></worksheet>",
                MAIN_NS, REL_NS, sheet_rows
            ),
        ),
    ];

    let file = File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    for (name, content) in parts.iter() {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        zip.start_file(*name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }

    zip.finish().unwrap();
}

/// Workbook with a `Sheet0` sheet holding a name column and an `MSISDN` column.
pub fn write_phone_workbook(path: &Path, numbers: &[Value]) {
    let mut rows = vec![vec![Text("Name"), Text("MSISDN")]];
    rows.extend(numbers.iter().map(|n| vec![Text("subscriber"), n.clone()]));
    write_xlsx(path, "Sheet0", &rows);
}

/// Read a CSV file back as its lines.
pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| line.to_string())
        .collect()
}

fn column_letter(index: usize) -> char {
    (b'A' + index as u8) as char
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
