use crate::config::toml_config::TomlConfig;
use crate::core::scheduler::Scheduler;
use crate::core::timer::TimerHandler;
use crate::domain::model::PingReport;
use crate::http::{self, server, shutdown};
use crate::utils::error::{KeepAliveError, Result};
use crate::utils::validation::Validate;
use std::future::Future;
use tokio::net::TcpListener;
use tokio::sync::watch;

/// Self-hosted runtime: serves the acknowledgement and pings on a schedule.
pub struct KeepAliveWorker {
    config: TomlConfig,
}

impl KeepAliveWorker {
    /// 建立前先驗證配置
    pub fn new(config: TomlConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Single timer invocation, for hosts that bring their own scheduler.
    pub async fn ping_once(&self) -> PingReport {
        TimerHandler::from_config(&self.config).run().await
    }

    /// Binds the configured address and runs until SIGINT or SIGTERM.
    pub async fn run(self) -> Result<()> {
        let addr = self.config.bind_addr()?;
        let listener = server::bind(addr).await?;
        self.run_on(listener, shutdown::shutdown_signal()).await
    }

    /// Runs the HTTP server on `listener` and the scheduler side by side.
    ///
    /// When `shutdown` resolves the server starts draining at once, even if a
    /// ping is still in flight; the scheduler stops after that ping completes.
    pub async fn run_on<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        let scheduler = Scheduler::from_config(&self.config)?;
        let (stop_tx, stop_rx) = watch::channel(false);

        // 啟動 HTTP 服務
        let server_task = tokio::spawn(server::serve(
            listener,
            http::create_router(),
            shutdown::wait_for_stop(stop_rx.clone()),
        ));

        // 訊號監聽與排程器分開輪詢，避免進行中的 ping 擋住關閉
        let notify = async {
            shutdown.await;
            tracing::info!("🛑 Shutdown requested, stopping HTTP server");
            let _ = stop_tx.send(true);
        };
        let (_, pings) = tokio::join!(
            notify,
            scheduler.run_until(shutdown::wait_for_stop(stop_rx))
        );

        tracing::debug!("Scheduler finished after {} ping(s)", pings);

        server_task.await.map_err(|e| KeepAliveError::ServerError {
            message: format!("HTTP server task failed: {}", e),
        })?
    }
}
