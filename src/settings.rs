//! Runtime settings shared by every practice program.
//!
//! Settings are read from `settings.json` in the working directory, then from
//! `<config dir>/glpractice/settings.json`. Any field left out keeps its default.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

const FILE_NAME: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    pub log_level: String,
    /// Degrees of rotation per pixel of mouse motion.
    pub mouse_sensitivity: f32,
    /// Camera movement in world units per second.
    pub camera_speed: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            vsync: true,
            log_level: "info".to_string(),
            mouse_sensitivity: 0.1,
            camera_speed: 2.5,
        }
    }
}

impl Settings {
    /// Parses settings from a JSON document.
    pub fn from_json(s: &str) -> Result<Self, String> {
        serde_json::from_str(s).map_err(|e| e.to_string())
    }

    /// Candidate settings files, in lookup order.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(FILE_NAME)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("glpractice").join(FILE_NAME));
        }
        paths
    }

    /// Loads the first settings file found, falling back to defaults.
    ///
    /// This runs before logging is set up, so problems are returned as warnings
    /// for the caller to log afterwards.
    pub fn load() -> (Self, Vec<String>) {
        let mut warnings = Vec::new();
        for path in Self::search_paths() {
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(settings) => return (settings, warnings),
                Err(e) => warnings.push(format!(
                    "Ignoring settings file {}: {}",
                    path.display(),
                    e
                )),
            }
        }
        (Self::default(), warnings)
    }

    pub fn from_file(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
        Self::from_json(&contents)
    }

    /// The configured log level, `Info` when it does not name a level.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_practice_window() {
        let settings = Settings::default();
        assert_eq!((settings.width, settings.height), (800, 600));
        assert!(settings.vsync);
        assert_eq!(settings.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "width": 1280, "log_level": "debug" }"#).unwrap();
        assert_eq!(settings.width, 1280);
        assert_eq!(settings.height, 600);
        assert_eq!(settings.level_filter(), LevelFilter::Debug);
        assert_eq!(settings.camera_speed, 2.5);
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let settings = Settings::from_json(r#"{ "log_level": "chatty" }"#).unwrap();
        assert_eq!(settings.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Settings::from_json("{ width: }").is_err());
    }

    #[test]
    fn reads_from_file() {
        let path = std::env::temp_dir().join("glpractice_settings_test.json");
        std::fs::write(&path, r#"{ "vsync": false, "mouse_sensitivity": 0.25 }"#).unwrap();
        let settings = Settings::from_file(&path).unwrap();
        assert!(!settings.vsync);
        assert_eq!(settings.mouse_sensitivity, 0.25);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn working_directory_is_searched_first() {
        assert_eq!(Settings::search_paths()[0], PathBuf::from("settings.json"));
    }
}
