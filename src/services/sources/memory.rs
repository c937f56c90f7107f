use crate::{error::AppResult, models::RawRow, services::sources::RowSource};

/// Rows held in memory, handed back as-is
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    rows: Vec<RawRow>,
}

impl MemorySource {
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }

    /// Builds a source from string slices, one slice per row
    pub fn from_fields(rows: &[&[&str]]) -> Self {
        Self::new(
            rows.iter()
                .map(|row| row.iter().map(|field| field.to_string()).collect())
                .collect(),
        )
    }
}

#[async_trait::async_trait]
impl RowSource for MemorySource {
    async fn load_rows(&self) -> AppResult<Vec<RawRow>> {
        Ok(self.rows.clone())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
