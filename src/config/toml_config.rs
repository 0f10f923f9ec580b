use crate::core::{ConfigProvider, ScheduleProvider};
use crate::utils::error::{KeepAliveError, Result};
use crate::utils::validation::{
    validate_range, validate_socket_addr, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "keepalive.toml";

/// The page whose hosting service should be kept from idling.
pub const DEFAULT_TARGET_URL: &str = "https://huggingface.co/spaces/kines9661/loess";

pub const DEFAULT_INTERVAL_SECONDS: u64 = 300;
pub const MAX_INTERVAL_SECONDS: u64 = 86_400;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub server: ServerConfig,
    pub keepalive: KeepAliveConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8787,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeepAliveConfig {
    pub target_url: String,
    pub interval_seconds: u64,
    pub ping_on_start: bool,
}

impl Default for KeepAliveConfig {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            interval_seconds: DEFAULT_INTERVAL_SECONDS,
            ping_on_start: true,
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            KeepAliveError::ConfigError {
                message: format!(
                    "Failed to read config file '{}': {}",
                    path.as_ref().display(),
                    e
                ),
            }
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// An explicitly requested file must exist; the default path is optional.
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        match explicit_path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                tracing::debug!(
                    "No {} found, using built-in defaults",
                    DEFAULT_CONFIG_PATH
                );
                Ok(Self::default())
            }
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        validate_socket_addr("server.host", &self.server.host, self.server.port)
    }
}

impl ConfigProvider for TomlConfig {
    fn target_url(&self) -> &str {
        &self.keepalive.target_url
    }
}

impl ScheduleProvider for TomlConfig {
    fn interval(&self) -> Duration {
        Duration::from_secs(self.keepalive.interval_seconds)
    }

    fn ping_on_start(&self) -> bool {
        self.keepalive.ping_on_start
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("keepalive.target_url", &self.keepalive.target_url)?;
        validate_range(
            "keepalive.interval_seconds",
            self.keepalive.interval_seconds,
            1,
            MAX_INTERVAL_SECONDS,
        )?;
        self.bind_addr()?;

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.target_url(), DEFAULT_TARGET_URL);
        assert_eq!(config.interval(), Duration::from_secs(300));
        assert!(config.ping_on_start());
        assert_eq!(config.bind_addr().unwrap().port(), 8787);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_sections_keep_remaining_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
            [keepalive]
            target_url = "https://example.com/health"
            "#,
        )
        .unwrap();

        assert_eq!(config.target_url(), "https://example.com/health");
        assert_eq!(config.keepalive.interval_seconds, DEFAULT_INTERVAL_SECONDS);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [server]
            host = "127.0.0.1"
            port = 9000

            [keepalive]
            target_url = "http://localhost:7860/"
            interval_seconds = 60
            ping_on_start = false
            "#
        )
        .unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();

        assert_eq!(config.bind_addr().unwrap(), "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.interval(), Duration::from_secs(60));
        assert!(!config.ping_on_start());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = TomlConfig::load(Some("/definitely/not/here/keepalive.toml"));
        assert!(matches!(result, Err(KeepAliveError::ConfigError { .. })));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let result = TomlConfig::from_toml_str("[keepalive\ntarget_url = ");
        assert!(matches!(result, Err(KeepAliveError::TomlParse(_))));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = TomlConfig::default();
        config.keepalive.interval_seconds = 0;
        assert!(config.validate().is_err());

        let mut config = TomlConfig::default();
        config.keepalive.target_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = TomlConfig::default();
        config.server.host = "   ".to_string();
        assert!(config.validate().is_err());
    }
}
