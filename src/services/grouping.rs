use crate::models::{CategoryGrouping, Item, OwnedItem, PersonGrouping, Record};

/// Groups records by person, then by category, in first-seen order
pub fn group_by_person(records: &[Record]) -> PersonGrouping {
    let mut grouped = PersonGrouping::new();

    for record in records {
        grouped
            .entry(record.person.clone())
            .or_default()
            .entry(record.category.clone())
            .or_default()
            .push(Item {
                title: record.title.clone(),
                note: record.note.clone(),
            });
    }

    grouped
}

/// Groups records by category, each pick keeping its contributor
pub fn group_by_category(records: &[Record]) -> CategoryGrouping {
    let mut grouped = CategoryGrouping::new();

    for record in records {
        grouped
            .entry(record.category.clone())
            .or_default()
            .push(OwnedItem {
                title: record.title.clone(),
                note: record.note.clone(),
                person: record.person.clone(),
            });
    }

    grouped
}
