//! User configuration
//!
//! Loads user preferences from `~/.config/text-helper/config.yaml`

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;
use crate::timestamp::{is_valid_format, DEFAULT_TIMESTAMP_FORMAT};
use crate::util::DEFAULT_PREVIEW_LINES;

/// Preferences that persist across runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelperConfig {
    /// Number of lines shown by the preview
    #[serde(default = "default_preview_lines")]
    pub preview_lines: usize,

    /// Format tag used when none is given (e.g. ".txt", ".csv")
    #[serde(default = "default_format")]
    pub default_format: String,

    /// strftime-style template for the "Processed on" footer
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_preview_lines() -> usize {
    DEFAULT_PREVIEW_LINES
}

fn default_format() -> String {
    OutputFormat::Txt.extension().to_string()
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            preview_lines: default_preview_lines(),
            default_format: default_format(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl HelperConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse YAML content, sanitizing values that cannot be used
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config.sanitized())
    }

    /// Output format selected by `default_format`
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_tag_or_txt(&self.default_format)
    }

    /// Replace values that would misbehave with their defaults
    fn sanitized(mut self) -> Self {
        if OutputFormat::from_tag(&self.default_format).is_none() {
            tracing::warn!(
                "Unknown default_format {:?} in config, using .txt",
                self.default_format
            );
            self.default_format = default_format();
        }
        if !is_valid_format(&self.timestamp_format) {
            tracing::warn!(
                "Invalid timestamp_format {:?} in config, using default",
                self.timestamp_format
            );
            self.timestamp_format = default_timestamp_format();
        }
        self
    }
}
