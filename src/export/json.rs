use crate::errors::AppResult;
use crate::export::model::ExportRow;
use std::io::Write;

/// Write rows as a pretty-printed JSON array.
pub fn write_json<W: Write>(mut out: W, rows: &[ExportRow]) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, rows)?;
    out.flush()?;
    Ok(())
}
