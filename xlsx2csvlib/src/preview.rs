//! Plain-text preview of the leading rows of a table.
//!
//! The layout mirrors the familiar dataframe console dump: a left-aligned
//! row-number column followed by right-aligned data columns separated by two
//! spaces. Widths are measured in terminal columns, so wide (CJK) characters
//! keep the columns aligned.

use console::{measure_text_width, pad_str, Alignment};

use crate::table::Table;

/// Number of rows shown by default.
pub const DEFAULT_PREVIEW_ROWS: usize = 20;

const COLUMN_GAP: &str = "  ";

/// Render at most `max_rows` data rows of `table` with its header.
///
/// A table without data rows renders as a three-line summary listing the
/// column names. The result has no trailing newline.
pub fn render_preview(table: &Table, max_rows: usize) -> String {
    let rows = table.head(max_rows);

    if rows.is_empty() {
        return format!(
            "Empty DataFrame\nColumns: [{}]\nIndex: []",
            table.columns.join(", ")
        );
    }

    let index: Vec<String> = (0..rows.len()).map(|i| i.to_string()).collect();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|c| escape(&c.to_preview())).collect())
        .collect();
    let headers: Vec<String> = table.columns.iter().map(|c| escape(c)).collect();

    let index_width = index.iter().map(|s| measure_text_width(s)).max().unwrap_or(0);
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, name)| {
            cells
                .iter()
                .map(|row| row.get(col).map_or(0, |v| measure_text_width(v)))
                .chain(std::iter::once(measure_text_width(name)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_line(&" ".repeat(index_width), &headers, &widths));
    for (label, row) in index.iter().zip(&cells) {
        lines.push(format_line(
            &pad_str(label, index_width, Alignment::Left, None),
            row,
            &widths,
        ));
    }

    lines.join("\n")
}

/// Cells missing from a short row are left blank.
fn format_line(index: &str, values: &[String], widths: &[usize]) -> String {
    let mut line = String::from(index);
    for (col, width) in widths.iter().enumerate() {
        let value = values.get(col).map_or("", String::as_str);
        line.push_str(COLUMN_GAP);
        line.push_str(&pad_str(value, *width, Alignment::Right, None));
    }
    line
}

/// Keep every row on one line.
fn escape(value: &str) -> String {
    value.replace('\r', "\\r").replace('\n', "\\n")
}
