pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "keepalive-worker", version)]
#[command(about = "Answers HTTP with a static acknowledgement and keeps a target URL warm")]
pub struct CliConfig {
    /// Path to TOML configuration file (defaults to ./keepalive.toml when present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Address to listen on
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// URL to ping on every tick
    #[arg(long)]
    pub target_url: Option<String>,

    /// Seconds between pings
    #[arg(long)]
    pub interval_seconds: Option<u64>,

    /// Wait one full interval before the first ping
    #[arg(long)]
    pub no_ping_on_start: bool,

    /// Ping once and exit without starting the HTTP server
    #[arg(long)]
    pub once: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the TOML layer and applies command line overrides on top.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = TomlConfig::load(self.config.as_deref())?;
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(target_url) = &self.target_url {
            tracing::info!("🔧 Target URL overridden to: {}", target_url);
            config.keepalive.target_url = target_url.clone();
        }
        if let Some(interval_seconds) = self.interval_seconds {
            config.keepalive.interval_seconds = interval_seconds;
        }
        if self.no_ping_on_start {
            config.keepalive.ping_on_start = false;
        }
    }
}
