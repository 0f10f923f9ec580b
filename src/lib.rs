pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::lambda::LambdaConfig;
pub use config::toml_config::TomlConfig;
pub use core::{request::acknowledge, timer::TimerHandler, worker::KeepAliveWorker};
pub use domain::model::{PingOutcome, PingReport};
pub use utils::error::{KeepAliveError, Result};
