use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::errors::VisionError;
use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisionSettings {
    pub endpoint_url: String,
    #[serde(default)]
    pub max_results: Option<u32>,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for VisionSettings {
    fn default() -> Self {
        Self {
            endpoint_url: global_constants::CLOUD_VISION_ANNOTATE_URL.to_string(),
            max_results: None,
            api_key: None,
        }
    }
}

impl VisionSettings {
    /// Loads settings from `explicit_path` when given. Otherwise uses the
    /// per-user config file, writing the defaults there on first run.
    pub fn load(explicit_path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit_path {
            return Self::load_from_path(path);
        }

        let settings_path = Self::get_settings_file_path()?;

        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to_path(&settings_path)?;
            return Ok(default_settings);
        }

        Self::load_from_path(&settings_path)
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {:?}", path))?;
        let settings: VisionSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file {:?}", path))?;

        log::info!("[SETTINGS] Loaded settings from {:?}", path);
        log::debug!("[SETTINGS] Endpoint URL: {}", settings.endpoint_url);
        log::debug!("[SETTINGS] Max results: {:?}", settings.max_results);

        Ok(settings)
    }

    pub fn save_to_path(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", path);
        Ok(())
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

#[derive(Clone, PartialEq)]
pub enum VisionCredentials {
    ApiKey(String),
    AccessToken(String),
}

impl std::fmt::Debug for VisionCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VisionCredentials::ApiKey(_) => write!(f, "ApiKey(***)"),
            VisionCredentials::AccessToken(_) => write!(f, "AccessToken(***)"),
        }
    }
}

impl VisionCredentials {
    pub fn from_environment(settings: &VisionSettings) -> Result<Self, VisionError> {
        Self::resolve(settings, |name| std::env::var(name).ok())
    }

    /// Precedence: API key variable, then the settings key, then an access token variable.
    pub fn resolve<F>(settings: &VisionSettings, lookup_env: F) -> Result<Self, VisionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty(lookup_env(global_constants::ENV_API_KEY)) {
            log::debug!("[SETTINGS] Using API key from {}", global_constants::ENV_API_KEY);
            return Ok(VisionCredentials::ApiKey(key));
        }

        if let Some(key) = non_empty(settings.api_key.clone()) {
            log::debug!("[SETTINGS] Using API key from settings file");
            return Ok(VisionCredentials::ApiKey(key));
        }

        if let Some(token) = non_empty(lookup_env(global_constants::ENV_ACCESS_TOKEN)) {
            log::debug!(
                "[SETTINGS] Using access token from {}",
                global_constants::ENV_ACCESS_TOKEN
            );
            return Ok(VisionCredentials::AccessToken(token));
        }

        Err(VisionError::MissingCredentials)
    }
}
