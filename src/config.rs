//! Page-chrome configuration.
//!
//! Every field has a default, so an empty JSON object (or no configuration
//! at all) yields the stock behaviour. In the browser the runtime reads an
//! optional `<script type="application/json" id="page-chrome-config">` block.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::state::notice::DEFAULT_NOTICE_DURATION_MS;
use crate::state::overlay::{DEFAULT_ERROR_MESSAGE, DEFAULT_LOADING_MESSAGE};
use crate::state::theme::DEFAULT_STORAGE_KEY;

/// Id of the DOM element holding JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "page-chrome-config";

pub const DEFAULT_NAVIGATING_MESSAGE: &str = "Navigating...";
pub const DEFAULT_PARSING_GRACE_MS: u64 = 500;
pub const DEFAULT_PARSED_GRACE_MS: u64 = 300;
pub const DEFAULT_NAVIGATION_DELAY_MS: u64 = 300;

/// Errors produced while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for this schema.
    #[error("config parse failed: {0}")]
    Parse(String),

    /// A field parsed but holds an unusable value.
    #[error("invalid config field {field}: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChromeConfig {
    /// Preference key the theme is persisted under.
    pub storage_key: String,
    pub loading_message: String,
    pub navigating_message: String,
    pub error_message: String,
    /// Loader grace delay when the document was still parsing at startup.
    pub parsing_grace_ms: u64,
    /// Loader grace delay when the document had already parsed.
    pub parsed_grace_ms: u64,
    pub navigation_delay_ms: u64,
    pub notice_duration_ms: u64,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            loading_message: DEFAULT_LOADING_MESSAGE.to_owned(),
            navigating_message: DEFAULT_NAVIGATING_MESSAGE.to_owned(),
            error_message: DEFAULT_ERROR_MESSAGE.to_owned(),
            parsing_grace_ms: DEFAULT_PARSING_GRACE_MS,
            parsed_grace_ms: DEFAULT_PARSED_GRACE_MS,
            navigation_delay_ms: DEFAULT_NAVIGATION_DELAY_MS,
            notice_duration_ms: DEFAULT_NOTICE_DURATION_MS,
        }
    }
}

impl ChromeConfig {
    /// Parse and validate configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::Invalid`] when a string field is blank.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `raw` if present, falling back to defaults on absence or error.
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::default();
        };
        Self::from_json(raw).unwrap_or_else(|e| {
            log::warn!("config: {e}; using defaults");
            Self::default()
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("storage_key", &self.storage_key),
            ("loading_message", &self.loading_message),
            ("navigating_message", &self.navigating_message),
            ("error_message", &self.error_message),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid { field, reason: "must not be blank" });
            }
        }
        Ok(())
    }
}
