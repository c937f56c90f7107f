use crate::models::{RawRow, Record, HEADER_SENTINEL};

/// Keeps rows with a person and a title, dropping header rows.
///
/// Rows are read positionally as `[person, category, title, note]`. Dropped
/// rows are never reported; order is preserved.
pub fn filter_rows(rows: &[RawRow]) -> Vec<Record> {
    let records: Vec<Record> = rows
        .iter()
        .map(|row| Record::from_fields(row.as_slice()))
        .filter(is_contribution)
        .collect();

    tracing::debug!(
        total = rows.len(),
        kept = records.len(),
        dropped = rows.len() - records.len(),
        "Rows filtered"
    );

    records
}

fn is_contribution(record: &Record) -> bool {
    !record.person.is_empty() && record.person != HEADER_SENTINEL && !record.title.is_empty()
}
