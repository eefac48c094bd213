//! Paperpile CSV reader.
//!
//! Reads an export into [`SourceRow`]s. The header row names the columns;
//! every following row becomes a [`RawRecord`] keyed by those names. Rows
//! shorter than the header simply lack the trailing columns, which the
//! formatter reports as missing fields for that row alone.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::RawRecord;

/// One data row of the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    /// 1-based line of the row in the input file
    pub line: usize,
    pub record: RawRecord,
}

/// Read every row of a CSV export.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not valid CSV.
pub fn read_rows(path: &Path) -> Result<Vec<SourceRow>> {
    let file = File::open(path)
        .map_err(|e| Error::Input(format!("Cannot open {}: {e}", path.display())))?;
    read_rows_from(file)
}

/// Read every row of a CSV export from any reader.
///
/// # Errors
///
/// Returns an error if the data is not valid CSV.
pub fn read_rows_from<R: Read>(reader: R) -> Result<Vec<SourceRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    debug!(columns = headers.len(), "Read CSV header");

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .and_then(|p| usize::try_from(p.line()).ok())
            .unwrap_or(index + 2);
        let raw: RawRecord = headers
            .iter()
            .zip(record.iter())
            .collect();
        rows.push(SourceRow { line, record: raw });
    }

    debug!(rows = rows.len(), "Read CSV rows");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const EXPORT: &str = "\
Item type,Title,Authors,URLs
Journal Article,\"On Things, and Stuff\",\"Doe J,Roe R\",https://a
Book Chapter,Short row
";

    #[test]
    fn test_read_rows_from() {
        let rows = read_rows_from(EXPORT.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);

        let first = &rows[0];
        assert_eq!(first.line, 2);
        assert_eq!(first.record.get("Title"), Some("On Things, and Stuff"));
        assert_eq!(first.record.get("Authors"), Some("Doe J,Roe R"));
        assert_eq!(first.record.get("URLs"), Some("https://a"));
    }

    #[test]
    fn test_short_row_lacks_trailing_columns() {
        let rows = read_rows_from(EXPORT.as_bytes()).unwrap();
        let short = &rows[1].record;
        assert_eq!(short.get("Title"), Some("Short row"));
        assert_eq!(short.get("Authors"), None);
        assert!(short.require("URLs").is_err());
    }

    #[test]
    fn test_header_only() {
        let rows = read_rows_from("Item type,Title\n".as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_read_rows_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EXPORT.as_bytes()).unwrap();
        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_read_rows_missing_file() {
        let err = read_rows(Path::new("/nonexistent/export.csv")).unwrap_err();
        assert!(matches!(err, Error::Input(_)));
    }
}
