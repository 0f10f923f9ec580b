use axum::http::StatusCode;

pub const ACKNOWLEDGEMENT: &str = "Keep-alive worker is running.";

/// Answers every inbound request, whatever its method, path, headers or body.
pub async fn acknowledge() -> (StatusCode, &'static str) {
    (StatusCode::OK, ACKNOWLEDGEMENT)
}
