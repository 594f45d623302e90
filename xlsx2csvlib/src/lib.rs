//! # xlsx2csvlib
//!
//! Convert the first sheet of a spreadsheet workbook to CSV.
//!
//! ## Overview
//!
//! The conversion is a straight pipeline:
//!
//! - **Load**: open the workbook (xlsx, xlsm, xlsb, xls or ods, detected by
//!   [calamine](https://docs.rs/calamine)) and read its first sheet into a [`Table`]
//! - **Write**: serialize the table as CSV, UTF-8 with a byte-order mark so
//!   spreadsheet applications pick the right encoding
//! - **Preview**: render the leading rows as aligned text for a quick look
//!
//! ## First-sheet assumption
//!
//! Only the first sheet is converted. When a workbook has more sheets, their
//! names are available through [`Sheet::skipped_sheets`] and a warning is
//! logged, but their contents are ignored.
//!
//! ## Table shape
//!
//! - The first row of the sheet's used range is the header
//! - Blank header cells are named `Unnamed: <index>`; repeated names get
//!   `.1`, `.2`, ... suffixes
//! - Every data row has as many cells as the header
//! - No row-number column is added to the CSV
//!
//! ## Example
//!
//! ```rust,ignore
//! use xlsx2csvlib::{convert, DEFAULT_PREVIEW_ROWS};
//!
//! let conversion = convert("report.xlsx", "report.csv")?;
//! println!("converted sheet '{}'", conversion.sheet.name);
//! println!("{}", conversion.preview(DEFAULT_PREVIEW_ROWS));
//! ```

pub mod convert;
pub mod error;
pub mod preview;
pub mod table;
pub mod workbook;
pub mod writer;

pub use convert::{convert, Conversion};
pub use error::ConversionError;
pub use preview::{render_preview, DEFAULT_PREVIEW_ROWS};
pub use table::{Cell, Table};
pub use workbook::{load_first_sheet, Sheet};
pub use writer::{write_csv, write_csv_to, UTF8_BOM};

/// Result type for xlsx2csvlib operations
pub type Result<T> = std::result::Result<T, ConversionError>;
