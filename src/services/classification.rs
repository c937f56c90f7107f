use crate::models::{Classification, ColorTriple, Palette};

/// Substring marking a category as photo-like
const PHOTO_NEEDLE: &str = "photo";

/// One entry of an ordered lookup table: matches when the lowercased label
/// contains any of its needles
#[derive(Debug, Clone)]
pub struct Rule<T> {
    pub needles: &'static [&'static str],
    pub value: T,
}

/// Ordered rules evaluated top to bottom, first match wins
#[derive(Debug, Clone)]
pub struct RuleTable<T> {
    rules: Vec<Rule<T>>,
    default: T,
}

impl<T: Copy> RuleTable<T> {
    pub fn new(rules: Vec<Rule<T>>, default: T) -> Self {
        Self { rules, default }
    }

    /// Returns the value of the first rule matching `label`, else the default
    pub fn lookup(&self, label: &str) -> T {
        let label = label.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.needles.iter().any(|needle| label.contains(needle)))
            .map(|rule| rule.value)
            .unwrap_or(self.default)
    }
}

fn rule<T>(needles: &'static [&'static str], value: T) -> Rule<T> {
    Rule { needles, value }
}

/// Classification tables for category labels
///
/// All lookups are pure: the same label classifies identically for as long
/// as the tables are unchanged.
#[derive(Debug, Clone)]
pub struct CategoryRules {
    pub weights: RuleTable<u32>,
    pub icons: RuleTable<&'static str>,
    pub pill_colors: RuleTable<ColorTriple>,
    pub header_colors: RuleTable<ColorTriple>,
    pub badge_colors: RuleTable<ColorTriple>,
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self::standard()
    }
}

impl CategoryRules {
    /// The standard ruleset
    pub fn standard() -> Self {
        let weights = RuleTable::new(
            vec![
                rule(&["movie"], 1),
                rule(&["tv", "show", "anime"], 2),
                rule(&["book"], 3),
                rule(&["album"], 5),
                rule(&["song"], 6),
                rule(&["artist"], 7),
                rule(&["concert", "live"], 8),
                rule(&["game"], 9),
                rule(&[PHOTO_NEEDLE], 11),
                rule(&["band"], 12),
            ],
            99,
        );

        let icons = RuleTable::new(
            vec![
                rule(&["movie"], "🎬"),
                rule(&["tv"], "📺"),
                rule(&["book"], "📚"),
                rule(&["song", "music"], "🎵"),
                rule(&["album"], "💿"),
                rule(&["artist"], "🎤"),
                rule(&["game"], "🎮"),
                rule(&[PHOTO_NEEDLE], "📸"),
                rule(&["concert"], "🏟️"),
            ],
            "🔹",
        );

        let pill_colors = RuleTable::new(
            vec![
                rule(&["movie"], ColorTriple::new("#E3F2FD", "#1565C0", "#90CAF9")),
                rule(&["tv"], ColorTriple::new("#E8F5E9", "#2E7D32", "#A5D6A7")),
                rule(&["book"], ColorTriple::new("#FFF3E0", "#EF6C00", "#FFCC80")),
                rule(
                    &["song", "music", "artist", "album"],
                    ColorTriple::new("#F3E5F5", "#7B1FA2", "#CE93D8"),
                ),
                rule(&["game"], ColorTriple::new("#ECEFF1", "#455A64", "#B0BEC5")),
                rule(&[PHOTO_NEEDLE], ColorTriple::new("#FFE0B2", "#E65100", "#FFCC80")),
            ],
            ColorTriple::new("#F5F5F5", "#444", "#E0E0E0"),
        );

        let header_colors = RuleTable::new(
            vec![
                rule(&["concert", "live"], ColorTriple::new("#F48FB1", "#880E4F", "#F06292")),
                rule(&["band"], ColorTriple::new("#B39DDB", "#4527A0", "#9575CD")),
                rule(&["movie"], ColorTriple::new("#81D4FA", "#01579B", "#4FC3F7")),
                rule(&["tv"], ColorTriple::new("#A5D6A7", "#1B5E20", "#81C784")),
                rule(&["book"], ColorTriple::new("#FFCC80", "#E65100", "#FFB74D")),
                rule(&["song", "music"], ColorTriple::new("#CE93D8", "#4A148C", "#BA68C8")),
                rule(&["game"], ColorTriple::new("#B0BEC5", "#263238", "#90A4AE")),
                rule(&[PHOTO_NEEDLE], ColorTriple::new("#FFAB91", "#BF360C", "#FF8A65")),
            ],
            ColorTriple::new("#EEEEEE", "#212121", "#BDBDBD"),
        );

        // Badges have no border of their own
        let badge_colors = RuleTable::new(
            vec![
                rule(&["movie"], ColorTriple::new("#E3F2FD", "#1565C0", "#E3F2FD")),
                rule(&["tv"], ColorTriple::new("#E8F5E9", "#2E7D32", "#E8F5E9")),
                rule(&["book"], ColorTriple::new("#FFF3E0", "#EF6C00", "#FFF3E0")),
                rule(
                    &["song", "album", "artist"],
                    ColorTriple::new("#F3E5F5", "#7B1FA2", "#F3E5F5"),
                ),
                rule(&["game"], ColorTriple::new("#ECEFF1", "#455A64", "#ECEFF1")),
                rule(&[PHOTO_NEEDLE], ColorTriple::new("#FFE0B2", "#E65100", "#FFE0B2")),
            ],
            ColorTriple::new("#eee", "#555", "#eee"),
        );

        Self {
            weights,
            icons,
            pill_colors,
            header_colors,
            badge_colors,
        }
    }

    pub fn weight(&self, category: &str) -> u32 {
        self.weights.lookup(category)
    }

    pub fn icon(&self, category: &str) -> &'static str {
        self.icons.lookup(category)
    }

    pub fn colors(&self, category: &str, palette: Palette) -> ColorTriple {
        match palette {
            Palette::Pill => self.pill_colors.lookup(category),
            Palette::Header => self.header_colors.lookup(category),
            Palette::Badge => self.badge_colors.lookup(category),
        }
    }

    /// Derives all display metadata for a category label
    pub fn classify(&self, category: &str) -> Classification {
        Classification {
            weight: self.weight(category),
            icon: self.icon(category),
            pill: self.colors(category, Palette::Pill),
            header: self.colors(category, Palette::Header),
            photo_like: is_photo_like(category),
        }
    }
}

/// True iff the lowercased label contains "photo"
pub fn is_photo_like(category: &str) -> bool {
    category.to_lowercase().contains(PHOTO_NEEDLE)
}
