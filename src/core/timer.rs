use crate::core::ConfigProvider;
use crate::domain::model::{PingOutcome, PingReport};
use crate::utils::error::KeepAliveError;
use chrono::Utc;
use reqwest::Client;
use std::time::Instant;

/// Issues one GET to the target URL per invocation and logs the result.
///
/// Holds no state between runs apart from the pooled HTTP client.
#[derive(Debug, Clone)]
pub struct TimerHandler {
    client: Client,
    target_url: String,
}

impl TimerHandler {
    pub fn new(target_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            target_url: target_url.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.target_url())
    }

    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    /// Never fails: transport errors are logged and reported in the outcome.
    pub async fn run(&self) -> PingReport {
        let started_at = Utc::now();
        let clock = Instant::now();

        let outcome = match self.client.get(&self.target_url).send().await {
            // 任何 HTTP 回應都算成功，狀態碼只記錄不判斷
            Ok(response) => {
                let status = response.status().as_u16();
                tracing::info!("Pinged {}: {}", self.target_url, status);
                PingOutcome::Reached { status }
            }
            // 網路錯誤只記錄，不向上傳遞也不重試
            Err(e) => {
                let error = KeepAliveError::from(e).detail();
                tracing::error!("Failed to ping {}: {}", self.target_url, error);
                PingOutcome::Failed { error }
            }
        };

        PingReport {
            target_url: self.target_url.clone(),
            started_at,
            elapsed_ms: u64::try_from(clock.elapsed().as_millis()).unwrap_or(u64::MAX),
            outcome,
        }
    }
}
