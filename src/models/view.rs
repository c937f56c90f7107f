use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ColorTriple, PickerNote};
use crate::error::AppError;

/// The two interchangeable top-level presentations
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Person,
    Category,
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::Person => write!(f, "person"),
            ViewMode::Category => write!(f, "category"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "person" => Ok(ViewMode::Person),
            "category" => Ok(ViewMode::Category),
            other => Err(AppError::InvalidInput(format!("unknown view mode: {}", other))),
        }
    }
}

// ============================================================================
// Person view
// ============================================================================

/// Picks grouped by contributor
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PersonView {
    pub sections: Vec<PersonSection>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PersonSection {
    pub name: String,
    pub color: String,
    pub note_count: usize,
    pub item_count: usize,
    /// Picks without a note, rendered as a pill cloud
    pub pills: Vec<Pill>,
    /// Picks with a note, rendered as a list
    pub detailed: Vec<DetailedEntry>,
    /// Picks from photo-like categories, rendered as a grid
    pub photos: Vec<PersonPhoto>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Pill {
    pub title: String,
    pub category: String,
    pub icon: &'static str,
    pub colors: ColorTriple,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DetailedEntry {
    pub title: String,
    pub category: String,
    pub icon: &'static str,
    pub note: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PersonPhoto {
    pub title: String,
    pub category: String,
    pub note: Option<String>,
    /// Set when the title names an image file
    pub image: Option<String>,
}

// ============================================================================
// Category view
// ============================================================================

/// Consolidated picks grouped by category
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryView {
    pub sections: Vec<CategorySection>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SectionLayout {
    PhotoGrid,
    DetailedList,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategorySection {
    pub label: String,
    pub icon: &'static str,
    pub colors: ColorTriple,
    pub weight: u32,
    pub layout: SectionLayout,
    pub entries: Vec<CategoryEntry>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryEntry {
    pub title: String,
    pub image: Option<String>,
    pub pickers: Vec<TaggedPicker>,
    pub notes: Vec<PickerNote>,
}

/// A picker name with its resolved colour
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TaggedPicker {
    pub name: String,
    pub color: String,
}

// ============================================================================
// Page
// ============================================================================

/// Frequently picked title prepared for the highlights panel
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Highlight {
    pub title: String,
    pub count: usize,
    pub category: String,
    pub badge: ColorTriple,
    /// `None` renders a placeholder
    pub image: Option<String>,
}

/// The active view, tagged by mode
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum BoardView {
    Person(PersonView),
    Category(CategoryView),
}

impl BoardView {
    pub fn mode(&self) -> ViewMode {
        match self {
            BoardView::Person(_) => ViewMode::Person,
            BoardView::Category(_) => ViewMode::Category,
        }
    }
}

/// Everything the rendering target needs for one page
#[derive(Debug, Clone, Serialize)]
pub struct BoardPage {
    pub highlights: Vec<Highlight>,
    pub view: BoardView,
    pub loaded_at: DateTime<Utc>,
}
