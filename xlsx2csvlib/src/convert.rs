//! High-level conversion API.
//!
//! Ties the loader and the CSV writer together: load the first sheet, then
//! write it out. The output file is only touched once the workbook has been
//! read successfully.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::preview::render_preview;
use crate::workbook::{load_first_sheet, Sheet};
use crate::writer::write_csv;
use crate::Result;

/// Outcome of a successful conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Workbook that was read
    pub input: PathBuf,
    /// CSV file that was written
    pub output: PathBuf,
    /// The converted sheet
    pub sheet: Sheet,
}

impl Conversion {
    /// Render the first `max_rows` rows of the converted table.
    pub fn preview(&self, max_rows: usize) -> String {
        render_preview(&self.sheet.table, max_rows)
    }
}

/// Convert the first sheet of the workbook at `input` to CSV at `output`.
///
/// # Example
///
/// ```rust,ignore
/// use xlsx2csvlib::{convert, DEFAULT_PREVIEW_ROWS};
///
/// let conversion = convert("budget.xlsx", "budget.csv")?;
/// println!("{}", conversion.preview(DEFAULT_PREVIEW_ROWS));
/// ```
pub fn convert(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<Conversion> {
    let input = input.as_ref();
    let output = output.as_ref();

    let sheet = load_first_sheet(input)?;
    info!(
        input = %input.display(),
        sheet = %sheet.name,
        rows = sheet.table.len(),
        columns = sheet.table.width(),
        "loaded workbook"
    );

    write_csv(&sheet.table, output)?;
    info!(output = %output.display(), "wrote CSV");

    Ok(Conversion {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        sheet,
    })
}
