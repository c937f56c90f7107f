use serde::Serialize;

/// Background, text and border colours for one category
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ColorTriple {
    pub background: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

impl ColorTriple {
    pub const fn new(background: &'static str, text: &'static str, border: &'static str) -> Self {
        Self {
            background,
            text,
            border,
        }
    }
}

/// Rendering context a colour triple is chosen for
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    /// Light colours for inline pills
    Pill,
    /// Saturated colours for section headers
    Header,
    /// Category badge on highlight cards
    Badge,
}

/// Display metadata derived from a category label
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Classification {
    /// Lower sorts first
    pub weight: u32,
    pub icon: &'static str,
    pub pill: ColorTriple,
    pub header: ColorTriple,
    pub photo_like: bool,
}
