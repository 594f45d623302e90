//! Core data structures for converted sheets

use std::collections::{HashMap, HashSet};
use std::fmt;

use calamine::Data;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Format used for date-time cells in both CSV and preview output.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Text shown in the preview for empty cells.
pub const MISSING_MARKER: &str = "NaN";

/// A single typed cell value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// No value
    #[default]
    Empty,
    /// Text value
    Text(String),
    /// Integer value
    Int(i64),
    /// Floating point value (spreadsheets store most numbers this way)
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Date and time
    DateTime(NaiveDateTime),
    /// Elapsed time, already rendered as `H:MM:SS` or ISO text
    Duration(String),
    /// Spreadsheet error value such as `#DIV/0!`
    Error(String),
}

impl Cell {
    /// Check if this cell holds no value
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Text written to the CSV field for this cell.
    ///
    /// Empty cells become empty fields.
    pub fn to_field(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            other => other.to_string(),
        }
    }

    /// Text shown in the console preview for this cell.
    ///
    /// Empty cells are shown as `NaN` so gaps stay visible.
    pub fn to_preview(&self) -> String {
        match self {
            Cell::Empty => MISSING_MARKER.to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Int(v) => write!(f, "{v}"),
            // f64's Display is the shortest round-trip form and drops a trailing ".0"
            Cell::Float(v) => write!(f, "{v}"),
            Cell::Bool(true) => f.write_str("True"),
            Cell::Bool(false) => f.write_str("False"),
            Cell::DateTime(dt) => write!(f, "{}", dt.format(DATETIME_FORMAT)),
            Cell::Duration(s) => f.write_str(s),
            Cell::Error(s) => f.write_str(s),
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Int(v) => Cell::Int(*v),
            Data::Float(v) => Cell::Float(*v),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => {
                if dt.is_duration() {
                    match dt.as_duration() {
                        Some(d) => Cell::Duration(format_duration(d)),
                        None => Cell::Float(dt.as_f64()),
                    }
                } else {
                    match dt.as_datetime() {
                        Some(value) => Cell::DateTime(value),
                        None => Cell::Float(dt.as_f64()),
                    }
                }
            }
            Data::DateTimeIso(s) => parse_iso_datetime(s)
                .map(Cell::DateTime)
                .unwrap_or_else(|| Cell::Text(s.clone())),
            Data::DurationIso(s) => Cell::Duration(s.clone()),
            Data::Error(e) => Cell::Error(e.to_string()),
        }
    }
}

fn format_duration(d: chrono::Duration) -> String {
    let total = d.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();
    format!(
        "{}{}:{:02}:{:02}",
        sign,
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// In-memory representation of one sheet.
///
/// The first sheet row becomes `columns`; every entry of `rows` has exactly
/// `columns.len()` cells, including tables built through `Deserialize`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTable")]
pub struct Table {
    /// Column names, in sheet order
    pub columns: Vec<String>,
    /// Data rows, in sheet order
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create a table from explicit column names and rows.
    ///
    /// Rows shorter than the header are padded with empty cells; longer rows
    /// are truncated.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Empty);
                row
            })
            .collect();
        Table { columns, rows }
    }

    /// Build a table from raw sheet rows, using the first row as the header.
    ///
    /// Empty header cells are named `Unnamed: <index>` and repeated names get
    /// `.1`, `.2`, ... suffixes so every column name is unique.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<Cell>>,
    {
        let mut iter = rows.into_iter();
        let Some(header) = iter.next() else {
            return Table::default();
        };
        let body: Vec<Vec<Cell>> = iter.collect();

        let width = body
            .iter()
            .map(|r| r.len())
            .chain(std::iter::once(header.len()))
            .max()
            .unwrap_or(0);

        let names = (0..width)
            .map(|i| match header.get(i) {
                Some(cell) if !cell.is_empty() => cell.to_field(),
                _ => format!("Unnamed: {i}"),
            })
            .collect();

        Table::new(dedupe_columns(names), body)
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows (header excluded)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first `n` data rows (or all of them if there are fewer).
    pub fn head(&self, n: usize) -> &[Vec<Cell>] {
        &self.rows[..n.min(self.rows.len())]
    }
}

/// Wire shape of a table before rows are fitted to the header.
#[derive(Deserialize)]
struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl From<RawTable> for Table {
    fn from(raw: RawTable) -> Self {
        Table::new(raw.columns, raw.rows)
    }
}

/// Make column names unique by suffixing later duplicates with `.N`.
fn dedupe_columns(names: Vec<String>) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut used: HashSet<String> = HashSet::new();

    names
        .into_iter()
        .map(|name| {
            let mut candidate = name.clone();
            while used.contains(&candidate) {
                let n = counts.entry(name.clone()).or_insert(0);
                *n += 1;
                candidate = format!("{name}.{n}");
            }
            used.insert(candidate.clone());
            candidate
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn test_float_formatting() {
        assert_eq!(Cell::Float(3.0).to_field(), "3");
        assert_eq!(Cell::Float(1.5).to_field(), "1.5");
        assert_eq!(Cell::Float(-0.25).to_field(), "-0.25");
        assert_eq!(Cell::Int(42).to_field(), "42");
    }

    #[test]
    fn test_empty_cell_field_and_preview() {
        assert_eq!(Cell::Empty.to_field(), "");
        assert_eq!(Cell::Empty.to_preview(), "NaN");
    }

    #[test]
    fn test_bool_formatting() {
        assert_eq!(Cell::Bool(true).to_field(), "True");
        assert_eq!(Cell::Bool(false).to_preview(), "False");
    }

    #[test]
    fn test_datetime_formatting() {
        let dt = NaiveDate::from_ymd_opt(2025, 10, 31)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        assert_eq!(Cell::DateTime(dt).to_field(), "2025-10-31 09:05:00");
    }

    #[test]
    fn test_from_calamine_data() {
        assert_eq!(Cell::from(&Data::Empty), Cell::Empty);
        assert_eq!(Cell::from(&Data::String("x".into())), text("x"));
        assert_eq!(Cell::from(&Data::Float(2.5)), Cell::Float(2.5));
        assert_eq!(Cell::from(&Data::Int(7)), Cell::Int(7));
        assert_eq!(Cell::from(&Data::Bool(true)), Cell::Bool(true));
        assert_eq!(
            Cell::from(&Data::Error(calamine::CellErrorType::Div0)),
            Cell::Error("#DIV/0!".to_string())
        );
    }

    #[test]
    fn test_from_iso_datetime() {
        let cell = Cell::from(&Data::DateTimeIso("2024-02-29T13:45:00".into()));
        assert_eq!(cell.to_field(), "2024-02-29 13:45:00");

        let date_only = Cell::from(&Data::DateTimeIso("2024-02-29".into()));
        assert_eq!(date_only.to_field(), "2024-02-29 00:00:00");

        let garbage = Cell::from(&Data::DateTimeIso("not a date".into()));
        assert_eq!(garbage, text("not a date"));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(chrono::Duration::seconds(3725)), "1:02:05");
        assert_eq!(format_duration(chrono::Duration::hours(30)), "30:00:00");
    }

    #[test]
    fn test_from_rows_uses_first_row_as_header() {
        let table = Table::from_rows(vec![
            vec![text("name"), text("amount")],
            vec![text("a"), Cell::Float(1.0)],
            vec![text("b"), Cell::Float(2.0)],
        ]);
        assert_eq!(table.columns, vec!["name", "amount"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.width(), 2);
        assert_eq!(table.rows[1], vec![text("b"), Cell::Float(2.0)]);
    }

    #[test]
    fn test_from_rows_names_blank_headers() {
        let table = Table::from_rows(vec![
            vec![text("a"), Cell::Empty, text("c")],
            vec![Cell::Int(1), Cell::Int(2), Cell::Int(3)],
        ]);
        assert_eq!(table.columns, vec!["a", "Unnamed: 1", "c"]);
    }

    #[test]
    fn test_from_rows_dedupes_headers() {
        let table = Table::from_rows(vec![vec![
            text("x"),
            text("x"),
            text("x.1"),
            text("x"),
        ]]);
        assert_eq!(table.columns, vec!["x", "x.1", "x.1.1", "x.2"]);
    }

    #[test]
    fn test_from_rows_pads_short_rows() {
        let table = Table::from_rows(vec![
            vec![text("a"), text("b"), text("c")],
            vec![Cell::Int(1)],
        ]);
        assert_eq!(table.rows[0], vec![Cell::Int(1), Cell::Empty, Cell::Empty]);
    }

    #[test]
    fn test_from_rows_widens_header_for_long_rows() {
        let table = Table::from_rows(vec![vec![text("a")], vec![Cell::Int(1), Cell::Int(2)]]);
        assert_eq!(table.columns, vec!["a", "Unnamed: 1"]);
        assert_eq!(table.rows[0].len(), 2);
    }

    #[test]
    fn test_from_rows_empty() {
        let table = Table::from_rows(Vec::<Vec<Cell>>::new());
        assert!(table.columns.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_head() {
        let rows = (0..30).map(|i| vec![Cell::Int(i)]).collect();
        let table = Table::new(vec!["n".to_string()], rows);
        assert_eq!(table.head(20).len(), 20);
        assert_eq!(table.head(100).len(), 30);
        assert_eq!(table.head(20)[19], vec![Cell::Int(19)]);
    }

    #[test]
    fn test_serializes_to_json() {
        let table = Table::new(vec!["a".to_string()], vec![vec![Cell::Int(1)]]);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["columns"][0], "a");
        assert_eq!(json["rows"][0][0]["Int"], 1);
    }

    #[test]
    fn test_deserialize_fits_rows_to_header() {
        let json = r#"{
            "columns": ["a", "b"],
            "rows": [[{"Int": 1}], [{"Int": 1}, {"Int": 2}, {"Int": 3}]]
        }"#;
        let table: Table = serde_json::from_str(json).unwrap();
        assert_eq!(table.rows[0], vec![Cell::Int(1), Cell::Empty]);
        assert_eq!(table.rows[1], vec![Cell::Int(1), Cell::Int(2)]);
    }
}
