//! CSV serialization with a UTF-8 byte-order mark.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::table::Table;
use crate::Result;

/// UTF-8 byte-order mark written at the start of every CSV file.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write `table` as CSV to the file at `path`, creating or truncating it.
///
/// See [`write_csv_to`] for the layout.
pub fn write_csv(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv_to(table, BufWriter::new(file))?;
    debug!(path = %path.display(), rows = table.len(), "wrote CSV");
    Ok(())
}

/// Write `table` as CSV to `writer`.
///
/// The output starts with the UTF-8 BOM, followed by the header record and
/// one record per row. Fields are quoted only when they contain a delimiter,
/// quote or line break. A table without columns produces only the BOM.
pub fn write_csv_to<W: Write>(table: &Table, mut writer: W) -> Result<()> {
    writer.write_all(UTF8_BOM)?;

    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    if table.width() > 0 {
        csv_writer.write_record(&table.columns)?;
        for row in &table.rows {
            csv_writer.write_record(row.iter().map(|cell| cell.to_field()))?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}
