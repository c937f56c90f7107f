/// Row source abstraction
///
/// Ingestion is pluggable: a source only has to hand back positional text
/// rows. Filtering and everything downstream happens in the core.
use crate::{
    error::AppResult,
    models::{RawRow, Record},
    services::row_filter::filter_rows,
};

pub mod csv_file;
pub mod memory;

pub use csv_file::CsvFileSource;
pub use memory::MemorySource;

/// Trait for favourites row sources
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RowSource: Send + Sync {
    /// Loads every row, header included if the source has one
    async fn load_rows(&self) -> AppResult<Vec<RawRow>>;

    /// Source name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Loads rows from `source` and keeps the contributions
pub async fn load_records(source: &dyn RowSource) -> AppResult<Vec<Record>> {
    let rows = source.load_rows().await?;
    let records = filter_rows(&rows);

    tracing::info!(
        source = source.name(),
        rows = rows.len(),
        records = records.len(),
        "Favourites loaded"
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn row(fields: &[&str]) -> RawRow {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[tokio::test]
    async fn test_load_records_filters_rows() {
        let mut source = MockRowSource::new();
        source.expect_load_rows().times(1).returning(|| {
            Ok(vec![
                row(&["Name", "Category", "Item", "Note"]),
                row(&["Ann", "Movie", "Dune", ""]),
                row(&["", "Movie", "Heat", ""]),
            ])
        });
        source.expect_name().return_const("mock");

        let records = load_records(&source).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Dune");
    }

    #[tokio::test]
    async fn test_load_records_propagates_source_error() {
        let mut source = MockRowSource::new();
        source
            .expect_load_rows()
            .returning(|| Err(AppError::Internal("unreachable".to_string())));
        source.expect_name().return_const("mock");

        assert!(load_records(&source).await.is_err());
    }
}
