use calamine::Data;

/// Text that a spreadsheet export uses for "no value". Matched exactly, never trimmed.
const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A single cell value as read from a sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Empty,
}

impl Cell {
    /// Missing cells never reach the extracted values or the raw count.
    pub fn is_missing(&self) -> bool {
        match self {
            Cell::Text(s) => MISSING_TOKENS.contains(&s.as_str()),
            other => other.is_blank(),
        }
    }

    /// Nothing at all in the cell. Header names only fall back on this.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Float(f) => f.is_nan(),
            Cell::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// String form of the value. Integral floats keep their `.0` so the
    /// cleaning step sees the same artifact a float-typed column produces.
    pub fn to_value_string(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) => format_float(*f),
            Cell::Bool(true) => "True".to_string(),
            Cell::Bool(false) => "False".to_string(),
            Cell::Empty => String::new(),
        }
    }
}

fn format_float(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Int(i) => Cell::Int(*i),
            Data::Float(f) => Cell::Float(*f),
            Data::String(s) => Cell::Text(s.clone()),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(datetime) if !dt.is_duration() => Cell::Text(datetime.to_string()),
                _ => Cell::Float(dt.as_f64()),
            },
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Error(_) | Data::Empty => Cell::Empty,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn non_missing(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| !cell.is_missing())
    }
}

/// One sheet held in memory as named columns. The first row supplies the names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetTable {
    columns: Vec<Column>,
}

impl SheetTable {
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<Cell>>,
    {
        let mut rows = rows.into_iter();

        let header = match rows.next() {
            Some(header) => header,
            None => return Self::default(),
        };

        let mut columns: Vec<Column> = header
            .iter()
            .enumerate()
            .map(|(index, cell)| Column {
                name: header_name(cell, index),
                cells: Vec::new(),
            })
            .collect();

        for row in rows {
            let mut cells = row.into_iter();
            for column in columns.iter_mut() {
                column.cells.push(cells.next().unwrap_or(Cell::Empty));
            }
        }

        Self { columns }
    }

    /// Trim surrounding whitespace from every column name.
    pub fn normalize_column_names(&mut self) {
        for column in &mut self.columns {
            let trimmed = column.name.trim();
            if trimmed.len() != column.name.len() {
                column.name = trimmed.to_string();
            }
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |column| column.cells.len())
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

fn header_name(cell: &Cell, index: usize) -> String {
    if cell.is_blank() {
        format!("Unnamed: {}", index)
    } else {
        cell.to_value_string()
    }
}
