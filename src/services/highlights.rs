use indexmap::IndexMap;

use crate::{
    config::BoardConfig,
    models::{Highlight, Palette, Record, TopFavourite},
    services::classification::CategoryRules,
};

/// Number of entries shown in the highlights panel
pub const HIGHLIGHT_LIMIT: usize = 3;

/// Title values that only ever appear on header rows
const RESERVED_TITLES: [&str; 2] = ["Item", "Name"];

/// Key used to count picks of the same title across the whole dataset.
///
/// Lowercases, cuts at the first `" s"` and at the first `" season"`, then
/// trims. The `" s"` cut also fires on any word starting with "s"
/// ("The Sopranos" → "the").
pub fn popularity_key(title: &str) -> String {
    let lowered = title.to_lowercase();
    let head = lowered.split(" s").next().unwrap_or_default();
    let head = head.split(" season").next().unwrap_or_default();
    head.trim().to_string()
}

/// Titles picked more than once, most picked first, at most three
pub fn top_favourites(records: &[Record]) -> Vec<TopFavourite> {
    let mut counts: IndexMap<String, TopFavourite> = IndexMap::new();

    for record in records {
        if record.title.is_empty() || RESERVED_TITLES.contains(&record.title.as_str()) {
            continue;
        }

        counts
            .entry(popularity_key(&record.title))
            .or_insert_with(|| TopFavourite {
                display_title: record.title.clone(),
                count: 0,
                category: record.category.clone(),
            })
            .count += 1;
    }

    let mut favourites: Vec<TopFavourite> = counts
        .into_values()
        .filter(|favourite| favourite.count > 1)
        .collect();

    // Stable: ties keep first-seen order
    favourites.sort_by(|a, b| b.count.cmp(&a.count));
    favourites.truncate(HIGHLIGHT_LIMIT);

    tracing::debug!(highlights = favourites.len(), "Top favourites computed");

    favourites
}

/// Attaches badge colours and highlight images to the top favourites
pub fn resolve_highlights(
    favourites: &[TopFavourite],
    config: &BoardConfig,
    rules: &CategoryRules,
) -> Vec<Highlight> {
    favourites
        .iter()
        .map(|favourite| Highlight {
            title: favourite.display_title.clone(),
            count: favourite.count,
            category: favourite.category.clone(),
            badge: rules.colors(&favourite.category, Palette::Badge),
            image: config
                .highlight_asset(&favourite.display_title)
                .map(str::to_string),
        })
        .collect()
}
