use std::path::Path;

use crate::{
    config::BoardConfig,
    models::{
        has_text, BoardView, CategoryEntry, CategorySection, CategoryView, ConsolidatedItem,
        DetailedEntry, Highlight, PersonPhoto, PersonSection, PersonView, Pill, Record,
        SectionLayout, TaggedPicker, ViewMode,
    },
    services::{
        classification::CategoryRules,
        consolidation::{consolidate, sort_consolidated, split_pools},
        grouping::{group_by_category, group_by_person},
        highlights::{resolve_highlights, top_favourites},
    },
};

/// File extensions photo titles are shown as images for
const IMAGE_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "gif", "png"];

/// Assembles view models from filtered records.
///
/// Holds no state between calls: every build re-derives its view from the
/// records it is given.
pub struct ViewBuilder<'a> {
    config: &'a BoardConfig,
    rules: &'a CategoryRules,
}

impl<'a> ViewBuilder<'a> {
    pub fn new(config: &'a BoardConfig, rules: &'a CategoryRules) -> Self {
        Self { config, rules }
    }

    /// Builds the view for `mode`
    pub fn build(&self, records: &[Record], mode: ViewMode) -> BoardView {
        tracing::debug!(mode = %mode, records = records.len(), "Building view");

        match mode {
            ViewMode::Person => BoardView::Person(self.person_view(records)),
            ViewMode::Category => BoardView::Category(self.category_view(records)),
        }
    }

    /// Builds the highlights panel
    pub fn highlights(&self, records: &[Record]) -> Vec<Highlight> {
        resolve_highlights(&top_favourites(records), self.config, self.rules)
    }

    /// Sections per person, fewest notes first, then fewest picks
    pub fn person_view(&self, records: &[Record]) -> PersonView {
        let mut sections: Vec<PersonSection> = group_by_person(records)
            .iter()
            .map(|(name, categories)| {
                let pools = split_pools(categories, self.rules);
                let note_count = pools.detailed.len()
                    + pools.photo.iter().filter(|item| has_text(&item.note)).count();
                let item_count = pools.simple.len() + pools.detailed.len() + pools.photo.len();

                PersonSection {
                    name: name.clone(),
                    color: self.config.person_color(name).to_string(),
                    note_count,
                    item_count,
                    pills: pools
                        .simple
                        .into_iter()
                        .map(|item| {
                            let classification = self.rules.classify(&item.category);
                            Pill {
                                icon: classification.icon,
                                colors: classification.pill,
                                title: item.title,
                                category: item.category,
                            }
                        })
                        .collect(),
                    detailed: pools
                        .detailed
                        .into_iter()
                        .map(|item| DetailedEntry {
                            icon: self.rules.icon(&item.category),
                            title: item.title,
                            category: item.category,
                            note: item.note,
                        })
                        .collect(),
                    photos: pools
                        .photo
                        .into_iter()
                        .map(|item| PersonPhoto {
                            image: self.photo_path(&item.title),
                            note: Some(item.note).filter(|note| has_text(note)),
                            title: item.title,
                            category: item.category,
                        })
                        .collect(),
                }
            })
            .collect();

        // Stable: equal counts keep first-seen order
        sections.sort_by(|a, b| {
            a.note_count
                .cmp(&b.note_count)
                .then_with(|| a.item_count.cmp(&b.item_count))
        });

        PersonView { sections }
    }

    /// Sections per category, lightest weight first
    pub fn category_view(&self, records: &[Record]) -> CategoryView {
        let mut sections: Vec<CategorySection> = group_by_category(records)
            .iter()
            .map(|(label, items)| {
                let classification = self.rules.classify(label);

                let mut consolidated = consolidate(items);
                sort_consolidated(&mut consolidated, classification.photo_like);

                let (layout, entries) = if classification.photo_like {
                    let entries = consolidated
                        .into_iter()
                        .map(|item| {
                            let image = self.photo_path(&item.display_title);
                            self.category_entry(item, image)
                        })
                        .collect();
                    (SectionLayout::PhotoGrid, entries)
                } else {
                    let entries = consolidated
                        .into_iter()
                        .map(|item| self.category_entry(item, None))
                        .collect();
                    (SectionLayout::DetailedList, entries)
                };

                CategorySection {
                    label: label.clone(),
                    icon: classification.icon,
                    colors: classification.header,
                    weight: classification.weight,
                    layout,
                    entries,
                }
            })
            .collect();

        // Stable: equal weights keep first-seen order
        sections.sort_by_key(|section| section.weight);

        CategoryView { sections }
    }

    fn category_entry(&self, item: ConsolidatedItem, image: Option<String>) -> CategoryEntry {
        CategoryEntry {
            title: item.display_title,
            image,
            pickers: item
                .pickers
                .into_iter()
                .map(|name| TaggedPicker {
                    color: self.config.person_color(&name).to_string(),
                    name,
                })
                .collect(),
            notes: item.notes,
        }
    }

    /// Image path for titles naming an image file
    fn photo_path(&self, title: &str) -> Option<String> {
        is_image_file(title).then(|| format!("{}/{}", self.config.photo_dir, title))
    }
}

/// True when the title ends in a known image extension
pub fn is_image_file(title: &str) -> bool {
    Path::new(title)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PersonColor;
    use crate::models::{Palette, PickerNote};

    fn record(person: &str, category: &str, title: &str, note: &str) -> Record {
        Record::from_fields(&[person, category, title, note])
    }

    fn config() -> BoardConfig {
        BoardConfig {
            person_colors: vec![PersonColor {
                key: "Ann".to_string(),
                color: "#C8E6C9".to_string(),
            }],
            ..BoardConfig::default()
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            record("Ann", "Movie", "Dune", ""),
            record("Bea", "Movie", "dune", "great!"),
            record("Ann", "Movie", "Dune", ""),
            record("Bea", "Photo Booth", "party.JPG", "ha"),
            record("Cy", "Book", "Emma", "lovely"),
            record("Cy", "Book", "Dracula", "spooky"),
            record("Bea", "Other", "Knitting", ""),
            record("Ann", "Photo Booth", "a blurry one", ""),
        ]
    }

    fn person_view(records: &[Record]) -> PersonView {
        let config = config();
        let rules = CategoryRules::standard();
        ViewBuilder::new(&config, &rules).person_view(records)
    }

    fn category_view(records: &[Record]) -> CategoryView {
        let config = config();
        let rules = CategoryRules::standard();
        ViewBuilder::new(&config, &rules).category_view(records)
    }

    #[test]
    fn test_dune_category_section() {
        let view = category_view(&sample());
        let movie = view.sections.iter().find(|s| s.label == "Movie").unwrap();

        assert_eq!(movie.layout, SectionLayout::DetailedList);
        assert_eq!(movie.entries.len(), 1);

        let dune = &movie.entries[0];
        assert_eq!(dune.title, "Dune");
        let pickers: Vec<&str> = dune.pickers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(pickers, vec!["Ann", "Bea", "Ann"]);
        assert_eq!(dune.pickers[0].color, "#C8E6C9");
        assert_eq!(dune.pickers[1].color, "#eee");
        assert_eq!(
            dune.notes,
            vec![PickerNote {
                person: "Bea".to_string(),
                text: "great!".to_string(),
            }]
        );
    }

    #[test]
    fn test_categories_sorted_by_weight() {
        let view = category_view(&sample());
        let labels: Vec<&str> = view.sections.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Movie", "Book", "Photo Booth", "Other"]);
        assert_eq!(view.sections[0].icon, "🎬");
        assert_eq!(view.sections[0].colors.background, "#81D4FA");
    }

    #[test]
    fn test_photo_section_is_alphabetical_grid() {
        let view = category_view(&sample());
        let photos = view.sections.iter().find(|s| s.label == "Photo Booth").unwrap();

        assert_eq!(photos.layout, SectionLayout::PhotoGrid);
        let titles: Vec<&str> = photos.entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["a blurry one", "party.JPG"]);
        assert_eq!(photos.entries[0].image, None);
        assert_eq!(photos.entries[1].image.as_deref(), Some("photos/party.JPG"));
    }

    #[test]
    fn test_persons_sorted_by_notes_then_items() {
        let view = person_view(&sample());
        let names: Vec<&str> = view.sections.iter().map(|s| s.name.as_str()).collect();
        // Ann: 0 notes / 3 picks, Bea: 2 notes / 3 picks, Cy: 2 notes / 2 picks
        assert_eq!(names, vec!["Ann", "Cy", "Bea"]);
    }

    #[test]
    fn test_person_section_pools() {
        let view = person_view(&sample());
        let bea = view.sections.iter().find(|s| s.name == "Bea").unwrap();

        assert_eq!(bea.color, "#eee");
        let pills: Vec<&str> = bea.pills.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(pills, vec!["Knitting"]);
        assert_eq!(bea.pills[0].icon, "🔹");
        assert_eq!(bea.detailed.len(), 1);
        assert_eq!(bea.detailed[0].title, "dune");
        assert_eq!(bea.detailed[0].note, "great!");
        assert_eq!(bea.photos.len(), 1);
        assert_eq!(bea.photos[0].note.as_deref(), Some("ha"));
        assert_eq!(bea.photos[0].image.as_deref(), Some("photos/party.JPG"));
    }

    #[test]
    fn test_person_pills_use_pill_palette() {
        let view = person_view(&sample());
        let ann = view.sections.iter().find(|s| s.name == "Ann").unwrap();
        assert_eq!(ann.pills.len(), 2);
        assert_eq!(ann.pills[0].colors.background, "#E3F2FD");
        assert_eq!(ann.pills[0].colors, CategoryRules::standard().colors("Movie", Palette::Pill));
        assert_eq!(ann.photos[0].note, None);
        assert_eq!(ann.photos[0].image, None);
    }

    #[test]
    fn test_build_is_idempotent() {
        let config = config();
        let rules = CategoryRules::standard();
        let builder = ViewBuilder::new(&config, &rules);
        let records = sample();

        for mode in [ViewMode::Person, ViewMode::Category] {
            let first = builder.build(&records, mode);
            let second = builder.build(&records, mode);
            assert_eq!(first, second);
            assert_eq!(first.mode(), mode);
        }
        assert_eq!(builder.highlights(&records), builder.highlights(&records));
    }

    #[test]
    fn test_highlights_from_builder() {
        let config = config();
        let rules = CategoryRules::standard();
        let highlights = ViewBuilder::new(&config, &rules).highlights(&sample());

        assert_eq!(highlights.len(), 1);
        assert_eq!(highlights[0].title, "Dune");
        assert_eq!(highlights[0].count, 3);
        assert_eq!(highlights[0].category, "Movie");
    }

    #[test]
    fn test_empty_records_build_empty_views() {
        assert!(person_view(&[]).sections.is_empty());
        assert!(category_view(&[]).sections.is_empty());
    }

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file("beach.png"));
        assert!(is_image_file("party.JPEG"));
        assert!(!is_image_file("a blurry one"));
        assert!(!is_image_file("notes.txt"));
    }
}
