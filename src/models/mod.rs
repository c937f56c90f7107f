use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub mod classification;
pub mod view;

pub use classification::{Classification, ColorTriple, Palette};
pub use view::{
    BoardPage, BoardView, CategoryEntry, CategorySection, CategoryView, DetailedEntry, Highlight,
    Pill, PersonPhoto, PersonSection, PersonView, SectionLayout, TaggedPicker, ViewMode,
};

/// Person value marking a header row
pub const HEADER_SENTINEL: &str = "Name";

/// One row as handed over by the ingester: positional text fields
pub type RawRow = Vec<String>;

/// One contribution: who picked what, in which category, with an optional note
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    pub person: String,
    pub category: String,
    pub title: String,
    /// Empty when the picker left no note
    pub note: String,
}

impl Record {
    /// Builds a record from positional fields `[person, category, title, note]`.
    /// Extra fields are ignored and missing trailing fields are empty.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Self {
        let field = |i: usize| {
            fields
                .get(i)
                .map(|f| f.as_ref().to_string())
                .unwrap_or_default()
        };

        Self {
            person: field(0),
            category: field(1),
            title: field(2),
            note: field(3),
        }
    }

    pub fn has_note(&self) -> bool {
        has_text(&self.note)
    }
}

/// True when a note carries anything besides whitespace
pub fn has_text(note: &str) -> bool {
    !note.trim().is_empty()
}

/// A pick inside the person grouping
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub title: String,
    pub note: String,
}

/// A pick inside the category grouping, carrying its contributor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OwnedItem {
    pub title: String,
    pub note: String,
    pub person: String,
}

/// Person → category → picks, in first-seen order at both levels
pub type PersonGrouping = IndexMap<String, IndexMap<String, Vec<Item>>>;

/// Category → picks with owners, in first-seen order
pub type CategoryGrouping = IndexMap<String, Vec<OwnedItem>>;

/// A note left by one of the pickers of a consolidated item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PickerNote {
    pub person: String,
    pub text: String,
}

/// Picks sharing a normalised title, merged into one entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsolidatedItem {
    /// First-encountered original casing
    pub display_title: String,
    /// One entry per merged pick, duplicates allowed
    pub pickers: Vec<String>,
    /// Only non-blank notes
    pub notes: Vec<PickerNote>,
}

impl ConsolidatedItem {
    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }
}

/// A title picked more than once across the whole dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopFavourite {
    pub display_title: String,
    pub count: usize,
    pub category: String,
}
