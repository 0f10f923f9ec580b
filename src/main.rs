use clap::Parser;
use keepalive_worker::core::ConfigProvider;
use keepalive_worker::utils::error::ErrorSeverity;
use keepalive_worker::utils::logger;
use keepalive_worker::{CliConfig, KeepAliveError, KeepAliveWorker};

fn exit_code(e: &KeepAliveError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,      // 警告，但成功
        ErrorSeverity::Medium => 2,   // 可重試錯誤
        ErrorSeverity::High => 1,     // 配置錯誤
        ErrorSeverity::Critical => 3, // 系統錯誤
    }
}

fn report_failure(stage: &str, e: &KeepAliveError) -> ! {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(e).max(1));
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("🚀 Starting keepalive-worker");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入 TOML 配置並套用命令列覆蓋設定
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => report_failure("Failed to load configuration", &e),
    };

    tracing::info!("🎯 Target URL: {}", config.target_url());

    // 驗證配置並建立 worker
    let worker = match KeepAliveWorker::new(config) {
        Ok(worker) => worker,
        Err(e) => report_failure("Configuration validation failed", &e),
    };

    // 單次模式：ping 結果只記錄在日誌，一律正常退出
    if cli.once {
        worker.ping_once().await;
        return;
    }

    // 啟動 HTTP 服務與排程器，直到收到關閉訊號
    if let Err(e) = worker.run().await {
        report_failure("Worker stopped with an error", &e);
    }

    tracing::info!("👋 keepalive-worker stopped");
}
