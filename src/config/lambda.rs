use crate::config::toml_config::DEFAULT_TARGET_URL;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use std::env;

/// Serverless configuration. The cadence belongs to the host's schedule rule,
/// so only the target is configurable here.
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub target_url: String,
}

impl LambdaConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            target_url: lookup("TARGET_URL")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TARGET_URL.to_string()),
        }
    }
}

impl ConfigProvider for LambdaConfig {
    fn target_url(&self) -> &str {
        &self.target_url
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_url("TARGET_URL", &self.target_url)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
