use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Production webhook endpoint used when no config overrides it
pub const DEFAULT_ENDPOINT: &str = "https://rasa-chatbot-flask-842373618484.us-central1.run.app/webhook";

/// Root configuration structure for nutrichat.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Webhook URL the chat turns are posted to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSection,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// `[logging]` section of nutrichat.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// Default log level for stderr output
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for stderr: "pretty", "json", "compact"
    #[serde(default = "default_log_format")]
    pub format: String,

    /// File logging configuration
    #[serde(default)]
    pub file: FileLoggingSection,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self { level: default_log_level(), format: default_log_format(), file: FileLoggingSection::default() }
    }
}

/// `[logging.file]` section of nutrichat.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileLoggingSection {
    /// Enable rolling file logging under ~/.nutrichat/logs/
    #[serde(default)]
    pub enabled: bool,

    /// Log level for the file layer
    #[serde(default = "default_file_log_level")]
    pub level: String,
}

fn default_file_log_level() -> String {
    "debug".to_string()
}

impl Default for FileLoggingSection {
    fn default() -> Self {
        Self { enabled: false, level: default_file_log_level() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { endpoint: default_endpoint(), logging: LoggingSection::default() }
    }
}

impl Config {
    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(Error::Config("endpoint must not be empty".to_string()));
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(Error::Config(format!("endpoint must be an http(s) URL: {}", self.endpoint)));
        }
        Ok(())
    }

    /// Example config written when none exists yet
    pub fn example() -> &'static str {
        r#"# NutriChat configuration

# Webhook the chat turns are posted to
endpoint = "https://rasa-chatbot-flask-842373618484.us-central1.run.app/webhook"

[logging]
level = "warn"
format = "pretty"

[logging.file]
enabled = false
level = "debug"
"#
    }
}
