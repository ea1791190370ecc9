// file: src/models/settings.rs
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_WORDS_PER_MINUTE: u32 = 110;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub words_per_minute: u32,      // speaking rate for duration estimates
    pub unknown_season_label: String,
    pub calendar_path: Option<PathBuf>,
    pub hymn_index_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            unknown_season_label: "Unbekannt".to_string(),
            calendar_path: None,
            hymn_index_path: None,
        }
    }
}
