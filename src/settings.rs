//! Runtime settings
//!
//! JSON file on native, LocalStorage on web. Combination difficulty is fixed
//! in `consts` and intentionally not part of the settings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{MAX_SUBSTEPS, VAULT_OPEN_SECS};

/// Settings load/validation failures
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation rate (ticks per second)
    pub sim_hz: u32,
    /// Maximum simulation ticks per rendered frame
    pub max_substeps: u32,
    /// Seconds the vault stays open before the next cycle
    pub vault_open_secs: f32,
    /// Fixed RNG seed (random when unset)
    pub seed: Option<u64>,
    /// Log filter (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sim_hz: 120,
            max_substeps: MAX_SUBSTEPS,
            vault_open_secs: VAULT_OPEN_SECS,
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Fixed simulation timestep in seconds
    pub fn sim_dt(&self) -> f32 {
        1.0 / self.sim_hz as f32
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(30..=1000).contains(&self.sim_hz) {
            return Err(SettingsError::Invalid {
                field: "sim_hz",
                reason: format!("{} not in 30..=1000", self.sim_hz),
            });
        }
        if self.max_substeps == 0 {
            return Err(SettingsError::Invalid {
                field: "max_substeps",
                reason: "must be at least 1".to_string(),
            });
        }
        if !self.vault_open_secs.is_finite() || self.vault_open_secs < 0.0 {
            return Err(SettingsError::Invalid {
                field: "vault_open_secs",
                reason: format!("{} is not a duration", self.vault_open_secs),
            });
        }
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(SettingsError::Invalid {
                field: "log_level",
                reason: format!("unknown level {:?}", self.log_level),
            });
        }
        Ok(())
    }

    /// Load settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "vault_lock_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native: `VAULT_SETTINGS` names a JSON file, otherwise defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var("VAULT_SETTINGS") else {
            return Self::default();
        };
        match Self::load_from_path(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path, e);
                Self::default()
            }
        }
    }
}
