use std::cmp::Ordering;

use indexmap::IndexMap;

use crate::{
    models::{has_text, ConsolidatedItem, Item, OwnedItem, PickerNote},
    services::classification::CategoryRules,
};

/// Key used to merge duplicate picks within one category: trimmed and lowercased.
///
/// Weaker than [`popularity_key`](crate::services::highlights::popularity_key),
/// which also strips season markers.
pub fn consolidation_key(title: &str) -> String {
    title.trim().to_lowercase()
}

/// Orders titles case-insensitively. Titles differing only in case put the
/// lowercase spelling first.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Merges picks sharing a consolidation key, in first-seen order
pub fn consolidate(items: &[OwnedItem]) -> Vec<ConsolidatedItem> {
    let mut merged: IndexMap<String, ConsolidatedItem> = IndexMap::new();

    for item in items {
        let entry = merged
            .entry(consolidation_key(&item.title))
            .or_insert_with(|| ConsolidatedItem {
                display_title: item.title.clone(),
                pickers: Vec::new(),
                notes: Vec::new(),
            });

        entry.pickers.push(item.person.clone());
        if has_text(&item.note) {
            entry.notes.push(PickerNote {
                person: item.person.clone(),
                text: item.note.clone(),
            });
        }
    }

    merged.into_values().collect()
}

/// Sorts consolidated items for display.
///
/// Photo-like categories sort by title alone. Everything else puts items
/// without notes first, then more pickers first, then title.
pub fn sort_consolidated(items: &mut [ConsolidatedItem], photo_like: bool) {
    if photo_like {
        items.sort_by(|a, b| compare_titles(&a.display_title, &b.display_title));
        return;
    }

    items.sort_by(|a, b| {
        a.has_notes()
            .cmp(&b.has_notes())
            .then_with(|| b.pickers.len().cmp(&a.pickers.len()))
            .then_with(|| compare_titles(&a.display_title, &b.display_title))
    });
}

/// A person's pick with its category attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PooledItem {
    pub title: String,
    pub note: String,
    pub category: String,
    pub weight: u32,
}

/// A person's picks across all categories, split by how they render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pools {
    /// No note, not photo-like
    pub simple: Vec<PooledItem>,
    /// Has a note, not photo-like
    pub detailed: Vec<PooledItem>,
    /// Photo-like, note or not
    pub photo: Vec<PooledItem>,
}

/// Flattens one person's categories into sorted pools.
///
/// Simple and detailed pools sort by category weight then title; the photo
/// pool sorts by title only.
pub fn split_pools(categories: &IndexMap<String, Vec<Item>>, rules: &CategoryRules) -> Pools {
    let mut pools = Pools::default();

    for (category, items) in categories {
        let classification = rules.classify(category);
        let weight = classification.weight;

        for item in items {
            let pooled = PooledItem {
                title: item.title.clone(),
                note: item.note.clone(),
                category: category.clone(),
                weight,
            };

            if classification.photo_like {
                pools.photo.push(pooled);
            } else if has_text(&item.note) {
                pools.detailed.push(pooled);
            } else {
                pools.simple.push(pooled);
            }
        }
    }

    let by_weight_then_title = |a: &PooledItem, b: &PooledItem| {
        a.weight
            .cmp(&b.weight)
            .then_with(|| compare_titles(&a.title, &b.title))
    };

    pools.simple.sort_by(by_weight_then_title);
    pools.detailed.sort_by(by_weight_then_title);
    pools.photo.sort_by(|a, b| compare_titles(&a.title, &b.title));

    pools
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(person: &str, title: &str, note: &str) -> OwnedItem {
        OwnedItem {
            title: title.to_string(),
            note: note.to_string(),
            person: person.to_string(),
        }
    }

    fn item(title: &str, note: &str) -> Item {
        Item {
            title: title.to_string(),
            note: note.to_string(),
        }
    }

    fn titles(items: &[ConsolidatedItem]) -> Vec<&str> {
        items.iter().map(|i| i.display_title.as_str()).collect()
    }

    #[test]
    fn test_consolidation_key_is_weak() {
        assert_eq!(consolidation_key("  Dune "), "dune");
        assert_eq!(consolidation_key("Andor Season 2"), "andor season 2");
    }

    #[test]
    fn test_dune_scenario() {
        let items = vec![
            owned("Ann", "Dune", ""),
            owned("Bea", "dune", "great!"),
            owned("Ann", "Dune", ""),
        ];

        let consolidated = consolidate(&items);
        assert_eq!(consolidated.len(), 1);
        assert_eq!(consolidated[0].display_title, "Dune");
        assert_eq!(consolidated[0].pickers, vec!["Ann", "Bea", "Ann"]);
        assert_eq!(
            consolidated[0].notes,
            vec![PickerNote {
                person: "Bea".to_string(),
                text: "great!".to_string(),
            }]
        );
    }

    #[test]
    fn test_picker_count_matches_input() {
        let items = vec![
            owned("Ann", "Dune", ""),
            owned("Bea", "Arrival", "wow"),
            owned("Cy", " dune", "again"),
            owned("Dee", "Heat", "  "),
            owned("Bea", "Heat", ""),
        ];

        let consolidated = consolidate(&items);
        let total: usize = consolidated.iter().map(|c| c.pickers.len()).sum();
        assert_eq!(total, items.len());
        assert!(consolidated
            .iter()
            .all(|c| !c.pickers.is_empty() && c.notes.len() <= c.pickers.len()));
        // Blank notes are not kept
        let heat = consolidated.iter().find(|c| c.display_title == "Heat").unwrap();
        assert!(heat.notes.is_empty());
    }

    #[test]
    fn test_standard_sort_order() {
        let mut consolidated = consolidate(&[
            owned("Ann", "Zodiac", "tense"),
            owned("Ann", "Heat", ""),
            owned("Bea", "Arrival", ""),
            owned("Cy", "Heat", ""),
            owned("Bea", "Alien", "classic"),
            owned("Cy", "Brazil", ""),
        ]);

        sort_consolidated(&mut consolidated, false);
        assert_eq!(
            titles(&consolidated),
            vec!["Heat", "Arrival", "Brazil", "Alien", "Zodiac"]
        );
    }

    #[test]
    fn test_photo_sort_ignores_notes() {
        let mut consolidated = consolidate(&[
            owned("Ann", "sunset.jpg", "gorgeous"),
            owned("Bea", "beach.png", ""),
            owned("Cy", "Market.jpg", ""),
            owned("Dee", "beach.png", ""),
        ]);

        sort_consolidated(&mut consolidated, true);
        assert_eq!(titles(&consolidated), vec!["beach.png", "Market.jpg", "sunset.jpg"]);
    }

    #[test]
    fn test_split_pools() {
        let rules = CategoryRules::standard();
        let mut categories = IndexMap::new();
        categories.insert(
            "Books".to_string(),
            vec![item("Emma", ""), item("Dracula", "spooky")],
        );
        categories.insert(
            "Movies".to_string(),
            vec![item("Heat", ""), item("Arrival", ""), item("Alien", "classic")],
        );
        categories.insert(
            "Photo Booth".to_string(),
            vec![item("zoo.jpg", "fun"), item("attic.png", "")],
        );

        let pools = split_pools(&categories, &rules);

        let simple: Vec<&str> = pools.simple.iter().map(|i| i.title.as_str()).collect();
        let detailed: Vec<&str> = pools.detailed.iter().map(|i| i.title.as_str()).collect();
        let photo: Vec<&str> = pools.photo.iter().map(|i| i.title.as_str()).collect();

        assert_eq!(simple, vec!["Arrival", "Heat", "Emma"]);
        assert_eq!(detailed, vec!["Alien", "Dracula"]);
        assert_eq!(photo, vec!["attic.png", "zoo.jpg"]);
    }

    #[test]
    fn test_simple_pool_equal_weight_is_alphabetical() {
        let rules = CategoryRules::standard();
        let mut categories = IndexMap::new();
        categories.insert("Movies".to_string(), vec![item("Zodiac", ""), item("Brazil", "")]);
        categories.insert("Film (movie)".to_string(), vec![item("Memento", "")]);

        let pools = split_pools(&categories, &rules);
        let simple: Vec<&str> = pools.simple.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(simple, vec!["Brazil", "Memento", "Zodiac"]);
    }

    #[test]
    fn test_compare_titles() {
        assert_eq!(compare_titles("alien", "Brazil"), Ordering::Less);
        assert_eq!(compare_titles("Dune", "Dune"), Ordering::Equal);
    }

    #[test]
    fn test_compare_titles_lowercase_first_on_case_tie() {
        assert_eq!(compare_titles("dune", "Dune"), Ordering::Less);
        assert_eq!(compare_titles("Dune", "dune"), Ordering::Greater);

        let rules = CategoryRules::standard();
        let mut categories = IndexMap::new();
        categories.insert(
            "Photos".to_string(),
            vec![item("Beach.png", ""), item("sunset.jpg", ""), item("beach.png", "")],
        );
        categories.insert("Movies".to_string(), vec![item("Heat", ""), item("heat", "")]);

        let pools = split_pools(&categories, &rules);
        let photo: Vec<&str> = pools.photo.iter().map(|i| i.title.as_str()).collect();
        let simple: Vec<&str> = pools.simple.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(photo, vec!["beach.png", "Beach.png", "sunset.jpg"]);
        assert_eq!(simple, vec!["heat", "Heat"]);
    }
}
