use crate::core::timer::TimerHandler;
use crate::core::ScheduleProvider;
use crate::utils::error::{KeepAliveError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

/// Drives a [`TimerHandler`] on a fixed cadence for self-hosted deployments.
///
/// Ticks are strictly sequential: a ping is awaited to completion before the
/// next tick is considered, and ticks missed while a slow ping was in flight
/// are delayed rather than fired in a burst.
pub struct Scheduler {
    handler: TimerHandler,
    every: Duration,
    ping_on_start: bool,
}

impl Scheduler {
    /// Rejects a zero cadence, which `tokio::time::interval` cannot represent.
    pub fn new(handler: TimerHandler, every: Duration, ping_on_start: bool) -> Result<Self> {
        if every.is_zero() {
            return Err(KeepAliveError::InvalidConfigValueError {
                field: "keepalive.interval_seconds".to_string(),
                value: format!("{:?}", every),
                reason: "Interval must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            handler,
            every,
            ping_on_start,
        })
    }

    pub fn from_config<C: ScheduleProvider>(config: &C) -> Result<Self> {
        Self::new(
            TimerHandler::from_config(config),
            config.interval(),
            config.ping_on_start(),
        )
    }

    /// Runs until `shutdown` resolves and returns the number of pings made.
    ///
    /// Shutdown is only observed between ticks; an in-flight ping finishes first.
    pub async fn run_until<F>(&self, shutdown: F) -> u64
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        let mut ticker = interval(self.every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // The first tick of a tokio interval completes immediately.
        if !self.ping_on_start {
            ticker.tick().await;
        }

        tracing::info!(
            "⏱️ Pinging {} every {:?}",
            self.handler.target_url(),
            self.every
        );

        let mut pings = 0u64;
        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    tracing::info!("Scheduler stopping after {} ping(s)", pings);
                    return pings;
                }
                _ = ticker.tick() => {
                    // 等待本次 ping 完成後才處理下一個 tick
                    self.handler.run().await;
                    pings += 1;
                }
            }
        }
    }
}
