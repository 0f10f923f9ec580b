use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeepAliveError {
    #[error("Outbound ping failed: {0}")]
    Ping(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

pub type Result<T> = std::result::Result<T, KeepAliveError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl KeepAliveError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            KeepAliveError::Ping(_) => ErrorCategory::Network,
            KeepAliveError::TomlParse(_)
            | KeepAliveError::ConfigError { .. }
            | KeepAliveError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            KeepAliveError::Io(_)
            | KeepAliveError::Serialization(_)
            | KeepAliveError::ServerError { .. } => ErrorCategory::System,
        }
    }

    /// A failed ping is only ever logged, so it never outranks `Low`.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            KeepAliveError::Ping(_) => {
                "Check that the target URL is reachable; the next scheduled tick will try again"
            }
            KeepAliveError::Io(_) => {
                "Check file permissions and that the listen address is not already in use"
            }
            KeepAliveError::TomlParse(_) => "Fix the syntax of the TOML configuration file",
            KeepAliveError::Serialization(_) => "Report this as a bug",
            KeepAliveError::ConfigError { .. } => {
                "Review the configuration file and command line flags"
            }
            KeepAliveError::InvalidConfigValueError { .. } => {
                "Correct the highlighted configuration value and restart"
            }
            KeepAliveError::ServerError { .. } => "Check the listen address and restart the worker",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            KeepAliveError::Ping(_) => format!("Could not reach the target: {}", self.detail()),
            KeepAliveError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    /// Renders the error together with every `source()` beneath it.
    ///
    /// `reqwest` keeps the interesting part (connection refused, DNS failure)
    /// in the source chain rather than in its own `Display`.
    pub fn detail(&self) -> String {
        let root: &(dyn std::error::Error + 'static) = match self {
            KeepAliveError::Ping(e) => e,
            other => other,
        };

        let mut rendered = root.to_string();
        let mut source = root.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !rendered.ends_with(&text) {
                rendered.push_str(": ");
                rendered.push_str(&text);
            }
            source = cause.source();
        }

        rendered
    }
}
