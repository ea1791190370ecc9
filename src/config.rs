//! Settings loading and validation
//!
//! Settings come from `<config dir>/kirchenjahr/config.json` when that file
//! exists, otherwise from defaults. Environment variables override either:
//!
//! * `KIRCHENJAHR_WPM` - speaking rate in words per minute
//! * `KIRCHENJAHR_CALENDAR` - path of the ICS file
//! * `KIRCHENJAHR_HYMN_INDEX` - path of the hymn-book index

use crate::error::{AppError, AppResult};
use crate::models::Settings;
use crate::utils::logging;
use std::env;
use std::path::{Path, PathBuf};

pub const ENV_WORDS_PER_MINUTE: &str = "KIRCHENJAHR_WPM";
pub const ENV_CALENDAR: &str = "KIRCHENJAHR_CALENDAR";
pub const ENV_HYMN_INDEX: &str = "KIRCHENJAHR_HYMN_INDEX";

const MAX_WORDS_PER_MINUTE: u32 = 400;

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("kirchenjahr").join("config.json"))
}

/// Loads settings from the default location, applies environment overrides
/// and validates the result.
pub fn load_settings() -> AppResult<Settings> {
    let mut settings = match default_config_path() {
        Some(path) if path.exists() => load_settings_from(&path)?,
        _ => {
            logging::log_settings_loaded("defaults", Settings::default().words_per_minute);
            Settings::default()
        }
    };

    apply_env_overrides(&mut settings)?;
    validate_settings(&settings)?;
    Ok(settings)
}

/// Reads settings from an explicit JSON file. Missing keys keep defaults.
pub fn load_settings_from(path: &Path) -> AppResult<Settings> {
    let content = std::fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&content)?;
    logging::log_settings_loaded(&path.display().to_string(), settings.words_per_minute);
    Ok(settings)
}

pub fn apply_env_overrides(settings: &mut Settings) -> AppResult<()> {
    if let Ok(value) = env::var(ENV_WORDS_PER_MINUTE) {
        settings.words_per_minute = value.trim().parse().map_err(|_| {
            AppError::config(format!("{} must be a number, got {:?}", ENV_WORDS_PER_MINUTE, value))
        })?;
    }
    if let Ok(value) = env::var(ENV_CALENDAR) {
        settings.calendar_path = Some(PathBuf::from(value));
    }
    if let Ok(value) = env::var(ENV_HYMN_INDEX) {
        settings.hymn_index_path = Some(PathBuf::from(value));
    }
    Ok(())
}

pub fn validate_settings(settings: &Settings) -> AppResult<()> {
    if settings.words_per_minute == 0 || settings.words_per_minute > MAX_WORDS_PER_MINUTE {
        return Err(AppError::config(format!(
            "words_per_minute must be between 1 and {}, got {}",
            MAX_WORDS_PER_MINUTE, settings.words_per_minute
        )));
    }
    if settings.unknown_season_label.trim().is_empty() {
        return Err(AppError::config("unknown_season_label must not be empty"));
    }
    Ok(())
}
