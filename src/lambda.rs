use keepalive_worker::core::dispatch::handle_event;
use keepalive_worker::utils::{logger, validation::Validate};
use keepalive_worker::{LambdaConfig, TimerHandler};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn function_handler(
    handler: &TimerHandler,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    tracing::debug!(request_id = %event.context.request_id, "Invocation received");

    let response = handle_event(handler, &event.payload).await?;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 初始化日誌 (JSON 格式)
    logger::init_lambda_logger();

    // 從環境變量讀取並驗證配置
    let config = LambdaConfig::from_env();
    config.validate()?;

    // 每個執行環境共用一個 HTTP client，暖啟動時重複使用
    let handler = TimerHandler::from_config(&config);
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(handler, event).await
    }))
    .await
}
