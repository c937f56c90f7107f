use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    services::highlights::popularity_key,
};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the favourites CSV file
    #[serde(default = "default_csv_path")]
    pub csv_path: String,

    /// Optional JSON file holding the board palette and asset tables
    #[serde(default)]
    pub board_config_path: Option<String>,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_csv_path() -> String {
    "2025_favourites.csv".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Loads the board configuration named by `board_config_path`, or the defaults
    pub fn board(&self) -> anyhow::Result<BoardConfig> {
        match &self.board_config_path {
            Some(path) => Ok(BoardConfig::from_file(path)?),
            None => Ok(BoardConfig::default()),
        }
    }
}

/// Person name fragment mapped to a display colour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonColor {
    /// Matched when the person's name contains it
    pub key: String,
    pub color: String,
}

/// Highlight image keyed by popularity key (lowercase, season info stripped)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HighlightAsset {
    pub key: String,
    pub path: String,
}

/// Operator-supplied lookup tables consumed by the view builder
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardConfig {
    /// Evaluated in order; the first key contained in a name wins
    #[serde(default)]
    pub person_colors: Vec<PersonColor>,

    #[serde(default = "default_person_color")]
    pub default_color: String,

    #[serde(default = "default_highlight_assets")]
    pub highlight_assets: Vec<HighlightAsset>,

    /// Directory photo file names are resolved against
    #[serde(default = "default_photo_dir")]
    pub photo_dir: String,
}

fn default_person_color() -> String {
    "#eee".to_string()
}

fn default_highlight_assets() -> Vec<HighlightAsset> {
    [
        ("weapons", "images/weapons.jpg"),
        ("andor", "images/andor.jpg"),
        ("the pitt", "images/pitt.jpg"),
    ]
    .into_iter()
    .map(|(key, path)| HighlightAsset {
        key: key.to_string(),
        path: path.to_string(),
    })
    .collect()
}

fn default_photo_dir() -> String {
    "photos".to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            person_colors: Vec::new(),
            default_color: default_person_color(),
            highlight_assets: default_highlight_assets(),
            photo_dir: default_photo_dir(),
        }
    }
}

impl BoardConfig {
    /// Reads a board configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| {
            AppError::Config(format!("Failed to parse board config {}: {}", path.display(), e))
        })
    }

    /// Resolves a person's colour by substring containment, falling back to the default
    pub fn person_color(&self, person: &str) -> &str {
        self.person_colors
            .iter()
            .find(|entry| person.contains(entry.key.as_str()))
            .map(|entry| entry.color.as_str())
            .unwrap_or(&self.default_color)
    }

    /// Looks up the highlight image for a title
    pub fn highlight_asset(&self, title: &str) -> Option<&str> {
        let key = popularity_key(title);
        self.highlight_assets
            .iter()
            .find(|asset| asset.key == key)
            .map(|asset| asset.path.as_str())
    }
}
