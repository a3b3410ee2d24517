use crate::error::{LingoError, LingoResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Endpoints
    pub language_endpoint: String,
    pub storage_endpoint: String,
    pub tts_endpoint: String,

    // Credentials (forwarded as-is)
    pub api_key: Option<String>,
    pub access_token: Option<String>,
    pub request_timeout_secs: u64,

    // Speech
    pub language_code: String,
    pub ssml_gender: String,
    pub audio_encoding: String,
    pub output_path: String,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language_endpoint: "https://language.googleapis.com/v1".to_string(),
            storage_endpoint: "https://storage.googleapis.com".to_string(),
            tts_endpoint: "https://texttospeech.googleapis.com/v1".to_string(),
            api_key: None,
            access_token: None,
            request_timeout_secs: 30,
            language_code: "en-US".to_string(),
            ssml_gender: "FEMALE".to_string(),
            audio_encoding: "MP3".to_string(),
            output_path: "output.mp3".to_string(),
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location, then apply environment overrides
    pub fn load() -> LingoResult<(Self, Option<String>)> {
        Self::load_from(&config_path())
    }

    /// Load config from an explicit path, falling back to defaults.
    ///
    /// Config is read before logging exists, so a corrupt file is reported
    /// back as a warning for the caller to log once a subscriber is up.
    pub fn load_from(path: &Path) -> LingoResult<(Self, Option<String>)> {
        let mut warning = None;
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warning = Some(format!(
                        "⚠️ Config file {} is invalid, using defaults: {}",
                        path.display(),
                        e
                    ));
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok((config, warning))
    }

    #[cfg(test)]
    fn save_to(&self, path: &Path) -> LingoResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("LINGO_API_KEY") {
            self.api_key = Some(v);
        }
        if let Some(v) = lookup("LINGO_ACCESS_TOKEN") {
            self.access_token = Some(v);
        }
        if let Some(v) = lookup("LINGO_LANGUAGE_ENDPOINT") {
            self.language_endpoint = v;
        }
        if let Some(v) = lookup("LINGO_STORAGE_ENDPOINT") {
            self.storage_endpoint = v;
        }
        if let Some(v) = lookup("LINGO_TTS_ENDPOINT") {
            self.tts_endpoint = v;
        }
    }

    fn validate(&self) -> LingoResult<()> {
        for (name, value) in [
            ("language_endpoint", &self.language_endpoint),
            ("storage_endpoint", &self.storage_endpoint),
            ("tts_endpoint", &self.tts_endpoint),
        ] {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                return Err(LingoError::Config(format!(
                    "{} must be an http(s) URL, got '{}'",
                    name, value
                )));
            }
        }
        if self.request_timeout_secs == 0 {
            return Err(LingoError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lingo")
        .join("config.json")
}
