use std::time::Duration;

/// Where the timer pings. Implemented by every configuration source.
pub trait ConfigProvider: Send + Sync {
    fn target_url(&self) -> &str;
}

/// Cadence settings for hosts that schedule pings themselves.
pub trait ScheduleProvider: ConfigProvider {
    fn interval(&self) -> Duration;
    fn ping_on_start(&self) -> bool;
}
