use crate::errors::{AppError, AppResult};
use crate::export::model::{ExportRow, HEADERS};
use csv::{QuoteStyle, WriterBuilder};
use std::io::Write;

/// Write rows as CSV (header `User,Email,Type,Date,Time,Location,Coordinates`).
///
/// Fields are quoted only when needed, so a `"lat, lon"` pair is quoted
/// and an absent coordinate stays an empty field.
pub fn write_csv<W: Write>(out: W, rows: &[ExportRow]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(out);

    wtr.write_record(HEADERS)?;
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn to_csv_string(rows: &[ExportRow]) -> AppResult<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, rows)?;
    String::from_utf8(buf).map_err(|e| AppError::Export(format!("CSV is not UTF-8: {e}")))
}
