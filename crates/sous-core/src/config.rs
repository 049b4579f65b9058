//! Application configuration.
//!
//! Configuration is read from a TOML file, by default
//! `$XDG_CONFIG_HOME/sous/config.toml`. Every field has a default, so a
//! missing file or a partial file is valid. The API key is resolved from, in
//! order of precedence: an explicit override (the `--api-key` flag), the
//! config file, then the `GEMINI_API_KEY` or `GOOGLE_API_KEY` environment
//! variables.
//!
//! ```toml
//! [api]
//! model = "gemini-1.5-flash"
//! timeout_secs = 30
//!
//! [speech]
//! command = "espeak -v en-us"
//!
//! [alert]
//! clip = "/usr/share/sounds/alert.wav"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SousError};

/// Default generative text endpoint base URL.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1";

/// Default model name.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default completion alert clip.
pub const DEFAULT_ALERT_CLIP: &str =
    "https://assets.mixkit.co/sfx/preview/mixkit-software-interface-alert-2573.mp3";

/// Environment variables consulted for the API key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub api: ApiConfig,
    pub speech: SpeechConfig,
    pub alert: AlertConfig,
}

/// Generative text endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL, without the `/models/...` suffix
    pub endpoint: String,
    /// Model name inserted into the request path
    pub model: String,
    /// API key sent as the `key` query parameter
    pub api_key: Option<String>,
    /// Whole-request timeout
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout_secs: 60,
        }
    }
}

impl ApiConfig {
    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Step narration settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpeechConfig {
    /// Whether narration is available at all
    pub enabled: bool,
    /// Text-to-speech command line; the text is appended as the last
    /// argument. Defaults to `say` on macOS and `espeak` elsewhere.
    pub command: Option<String>,
    /// Speaking rate in words per minute (0.9x of the usual 175)
    pub rate_wpm: u32,
    /// Pitch on espeak's 0-99 scale
    pub pitch: u32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: None,
            rate_wpm: 157,
            pitch: 50,
        }
    }
}

/// Completion alert settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlertConfig {
    pub enabled: bool,
    /// Remote URL or local path of the clip
    pub clip: String,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            clip: DEFAULT_ALERT_CLIP.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from `path`, or from the XDG config file when no
    /// path is given.
    ///
    /// # Errors
    ///
    /// Returns `SousError::FileSystem` if an explicit path cannot be read and
    /// `SousError::Configuration` if the file is not valid TOML for this
    /// schema. A missing XDG file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_config_path() {
                Some(path) => path,
                None => {
                    debug!("No config file found, using defaults");
                    return Ok(Config::default());
                }
            },
        };

        let raw = std::fs::read_to_string(&path).map_err(|e| SousError::FileSystem {
            path: path.clone(),
            source: e,
        })?;
        debug!("Loading config from {}", path.display());
        Self::from_toml(&raw)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(raw: &str) -> Result<Config> {
        toml::from_str(raw).map_err(|e| SousError::Configuration {
            message: format!("Invalid config file: {e}"),
        })
    }

    /// Existing XDG config file, if any.
    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("sous").find_config_file("config.toml")
    }

    /// Applies the API key precedence rules, using `override_key` first and
    /// the environment last.
    pub fn with_api_key(mut self, override_key: Option<String>) -> Self {
        self.api.api_key = resolve_api_key(override_key, self.api.api_key.take(), |name| {
            std::env::var(name).ok()
        });
        self
    }
}

fn resolve_api_key<F>(flag: Option<String>, file: Option<String>, env: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: Option<String>| key.filter(|k| !k.trim().is_empty());
    non_empty(flag)
        .or_else(|| non_empty(file))
        .or_else(|| API_KEY_ENV_VARS.iter().find_map(|name| non_empty(env(name))))
}
