use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use paper2blog_core::PacingSchedule;
use paper2blog_engine::ApiSettings;
use paper2blog_logging::{form_info, form_warn};
use serde::{Deserialize, Serialize};

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "paper2blog.ron";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub output_dir: PathBuf,
    pub store_dir: PathBuf,
    /// Save the form (debounced) on every field edit.
    pub autosave: bool,
    /// Apply the saved form before command line values.
    pub restore_on_start: bool,
    /// Play the cosmetic progress delays; `false` keeps the stages but skips the waits.
    pub simulate_progress: bool,
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: ApiSettings::default().base_url,
            output_dir: PathBuf::from("output"),
            store_dir: PathBuf::from(".paper2blog"),
            autosave: false,
            restore_on_start: false,
            simulate_progress: true,
            request_timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// Reads an explicitly requested config file. Any failure is an error.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = ron::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        form_info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Reads the optional default config file; a missing or broken file
    /// falls back to defaults.
    pub fn load_default(dir: &Path) -> Self {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                form_warn!("{}; using defaults", err);
                Self::default()
            }
        }
    }

    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            base_url: self.base_url.clone(),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn pacing(&self) -> PacingSchedule {
        if self.simulate_progress {
            PacingSchedule::default()
        } else {
            PacingSchedule::instant()
        }
    }
}
