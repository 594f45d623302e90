//! Workbook loading.
//!
//! Only the first sheet of a workbook is read. Workbooks that spread the data
//! of interest across several sheets are converted partially; a warning is
//! logged naming the sheets that were skipped.

use std::path::Path;

use calamine::{open_workbook_auto, Reader};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ConversionError;
use crate::table::{Cell, Table};
use crate::Result;

/// A sheet loaded from a workbook.
#[derive(Debug, Clone, Serialize)]
pub struct Sheet {
    /// Sheet name as stored in the workbook
    pub name: String,
    /// Names of every sheet in the workbook, in workbook order
    pub all_sheets: Vec<String>,
    /// Sheet contents
    pub table: Table,
}

impl Sheet {
    /// Sheets present in the workbook that were not loaded.
    pub fn skipped_sheets(&self) -> &[String] {
        self.all_sheets.get(1..).unwrap_or(&[])
    }
}

/// Load the first sheet of the workbook at `path`.
///
/// The workbook format (xlsx, xlsm, xlsb, xls, ods) is detected from the
/// file. The first row of the sheet's used range becomes the table header.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be parsed as a
/// workbook, or contains no sheets.
pub fn load_first_sheet(path: impl AsRef<Path>) -> Result<Sheet> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConversionError::InputNotFound(path.to_path_buf()));
    }

    let mut workbook =
        open_workbook_auto(path).map_err(|e| ConversionError::workbook(path, e))?;

    let all_sheets = workbook.sheet_names();
    let Some(name) = all_sheets.first().cloned() else {
        return Err(ConversionError::NoSheets(path.to_path_buf()));
    };

    if all_sheets.len() > 1 {
        warn!(
            sheet = %name,
            skipped = ?&all_sheets[1..],
            "workbook has {} sheets; only the first is converted",
            all_sheets.len()
        );
    }

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| ConversionError::workbook(path, e))?;

    let (height, width) = range.get_size();
    // The range begins at the first used column; blank leading columns still
    // count as sheet columns.
    let leading = range.start().map_or(0, |(_, col)| col as usize);
    debug!(sheet = %name, height, width, leading, "read sheet range");

    let table = Table::from_rows(range.rows().map(|row| {
        std::iter::repeat(Cell::Empty)
            .take(leading)
            .chain(row.iter().map(Cell::from))
            .collect::<Vec<_>>()
    }));

    Ok(Sheet {
        name,
        all_sheets,
        table,
    })
}
