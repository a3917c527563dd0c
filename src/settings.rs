//! User settings stored as settings.json in the app data directory

use crate::constants::{API_URL_ENV, DEFAULT_API_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Backend
    pub api_base_url: String,

    // Navigation
    pub last_universe_id: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            last_universe_id: None,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// API base URL, with the environment variable taking precedence
    pub fn api_base_url(&self) -> String {
        Self::resolve_api_url(std::env::var(API_URL_ENV).ok(), &self.api_base_url)
    }

    fn resolve_api_url(env_value: Option<String>, configured: &str) -> String {
        match env_value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            Some(url) => {
                info!(url = %url, "Using API URL from {}", API_URL_ENV);
                url
            }
            None if configured.trim().is_empty() => DEFAULT_API_BASE_URL.to_string(),
            None => configured.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"last_universe_id":3}"#).unwrap();
        assert_eq!(settings.last_universe_id, Some(3));
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert!(settings.window_w.is_none());
    }

    #[test]
    fn save_then_load_from_data_dir() {
        let dir = std::env::temp_dir().join(format!("stars-admin-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let settings = Settings {
            api_base_url: "http://example.test/api".into(),
            last_universe_id: Some(7),
            ..Settings::default()
        };
        settings.save(&dir);
        assert_eq!(Settings::load(&dir), settings);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn env_url_overrides_configured() {
        assert_eq!(
            Settings::resolve_api_url(Some(" http://env/api ".into()), "http://cfg/api"),
            "http://env/api"
        );
        assert_eq!(
            Settings::resolve_api_url(Some(String::new()), "http://cfg/api"),
            "http://cfg/api"
        );
        assert_eq!(Settings::resolve_api_url(None, "  "), DEFAULT_API_BASE_URL);
    }
}
