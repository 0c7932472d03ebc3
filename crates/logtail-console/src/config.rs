/*
[INPUT]:  YAML configuration file, CLI overrides
[OUTPUT]: Parsed and validated console configuration
[POS]:    Configuration layer - server address, polling and row limits
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use logtail_adapter::http::normalize_base_url;
use logtail_adapter::{ClientConfig, DEFAULT_BASE_URL, LogLevel};
use serde::{Deserialize, Serialize};

use crate::session::SessionSettings;
use crate::session::table::DEFAULT_MAX_ROWS;

/// Top-level configuration for the console
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConsoleConfig {
    /// Server address the endpoints are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Level requested from the log endpoint
    #[serde(default)]
    pub log_level: LogLevel,
    /// Level sent when clearing the server log
    #[serde(default)]
    pub clear_level: LogLevel,
    /// Seconds between two polls of the live tail
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Rows kept in the log table before the oldest are dropped
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            log_level: LogLevel::default(),
            clear_level: LogLevel::default(),
            poll_interval_secs: default_poll_interval_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            max_rows: default_max_rows(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_poll_interval_secs() -> u64 {
    3
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_max_rows() -> usize {
    DEFAULT_MAX_ROWS
}

impl ConsoleConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("parse config file {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Resolve the configuration: explicit path, else the per-user default
    /// file when present, else built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        normalize_base_url(&self.base_url)
            .with_context(|| format!("invalid base_url: {}", self.base_url))?;
        if self.poll_interval_secs == 0 {
            bail!("poll_interval_secs must be greater than zero");
        }
        if self.max_rows == 0 {
            bail!("max_rows must be greater than zero");
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.request_timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            log_level: self.log_level,
            clear_level: self.clear_level,
            max_rows: self.max_rows,
        }
    }
}

/// `<config dir>/logtail/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("logtail").join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = ConsoleConfig::from_yaml("{}").expect("parse");
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.poll_interval(), Duration::from_secs(3));
        assert_eq!(config.session_settings(), SessionSettings::default());
    }

    #[test]
    fn full_document_is_read() {
        let config = ConsoleConfig::from_yaml(
            r#"
base_url: "http://domo.local:8080/"
log_level: warning
clear_level: critical
poll_interval_secs: 5
request_timeout_secs: 12
connect_timeout_secs: 2
max_rows: 100
"#,
        )
        .expect("parse");
        assert_eq!(config.log_level, LogLevel::Warning);
        assert_eq!(config.clear_level, LogLevel::Critical);
        assert_eq!(config.client_config().timeout, Duration::from_secs(12));
        assert_eq!(config.client_config().connect_timeout, Duration::from_secs(2));
        assert_eq!(config.session_settings().max_rows, 100);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(ConsoleConfig::from_yaml("base_url: \"::nope\"").is_err());
        assert!(ConsoleConfig::from_yaml("poll_interval_secs: 0").is_err());
        assert!(ConsoleConfig::from_yaml("max_rows: 0").is_err());
        assert!(ConsoleConfig::from_yaml("log_level: verbose").is_err());
    }

    #[test]
    fn yaml_roundtrip_keeps_values() {
        let config = ConsoleConfig {
            base_url: "http://10.0.0.2/".to_string(),
            poll_interval_secs: 7,
            ..ConsoleConfig::default()
        };
        let yaml = config.to_yaml().expect("serialize");
        assert_eq!(ConsoleConfig::from_yaml(&yaml).expect("parse"), config);
    }

    #[test]
    fn missing_file_has_context() {
        let err = ConsoleConfig::from_file("/nonexistent/logtail.yaml").expect_err("missing");
        assert!(format!("{err:#}").contains("/nonexistent/logtail.yaml"));
    }
}
