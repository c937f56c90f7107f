/// CSV file source
///
/// Reads a header-optional, comma-delimited favourites export. Rows may be
/// ragged; blank lines are skipped.
use std::io::Read;
use std::path::PathBuf;

use crate::{error::AppResult, models::RawRow, services::sources::RowSource};

#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Parses CSV text into positional rows
pub fn parse_rows<R: Read>(reader: R) -> AppResult<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(rows)
}

#[async_trait::async_trait]
impl RowSource for CsvFileSource {
    async fn load_rows(&self) -> AppResult<Vec<RawRow>> {
        tracing::debug!(path = %self.path.display(), "Reading favourites CSV");

        let bytes = tokio::fs::read(&self.path).await?;
        parse_rows(bytes.as_slice())
    }

    fn name(&self) -> &'static str {
        "csv_file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_rows_keeps_header_and_ragged_rows() {
        let csv = "Name,Category,Item,Note\nAnn,Movie,Dune\nBea,Book,Emma,\"lovely, really\",extra\n";
        let rows = parse_rows(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], "Name");
        assert_eq!(rows[1], vec!["Ann", "Movie", "Dune"]);
        assert_eq!(rows[2][3], "lovely, really");
        assert_eq!(rows[2].len(), 5);
    }

    #[test]
    fn test_parse_rows_skips_blank_lines() {
        let csv = "Ann,Movie,Dune,\n\n,,,\nBea,Book,Emma,\n";
        let rows = parse_rows(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_load_rows_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Name,Category,Item,Note").unwrap();
        writeln!(file, "Ann,Movie,Dune,great").unwrap();

        let source = CsvFileSource::new(file.path());
        let rows = tokio_test::block_on(source.load_rows()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][3], "great");
    }

    #[test]
    fn test_load_rows_missing_file() {
        let source = CsvFileSource::new("/nonexistent/favourites.csv");
        assert!(tokio_test::block_on(source.load_rows()).is_err());
    }
}
