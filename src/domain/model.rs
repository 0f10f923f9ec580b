use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened to a single outbound ping.
///
/// Any HTTP response counts as `Reached`, whatever its status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum PingOutcome {
    Reached { status: u16 },
    Failed { error: String },
}

impl PingOutcome {
    pub fn is_reached(&self) -> bool {
        matches!(self, PingOutcome::Reached { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            PingOutcome::Reached { status } => Some(*status),
            PingOutcome::Failed { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingReport {
    pub target_url: String,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
    pub outcome: PingOutcome,
}
