//! Classification of serverless invocations.
//!
//! A function deployed behind both a function URL and a schedule rule receives
//! two kinds of payloads through the same entry point. HTTP events carry a
//! `requestContext` object; everything else is treated as a timer trigger.

use crate::core::request::ACKNOWLEDGEMENT;
use crate::core::timer::TimerHandler;
use crate::utils::error::Result;
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    Http,
    Scheduled,
}

impl Invocation {
    pub fn classify(payload: &Value) -> Self {
        match payload.get("requestContext") {
            Some(Value::Object(_)) => Invocation::Http,
            _ => Invocation::Scheduled,
        }
    }
}

/// Proxy-integration response carrying the fixed acknowledgement.
pub fn http_acknowledgement() -> Value {
    json!({
        "statusCode": 200,
        "headers": { "content-type": "text/plain; charset=utf-8" },
        "isBase64Encoded": false,
        "body": ACKNOWLEDGEMENT,
    })
}

/// Answers one serverless event: HTTP events get the acknowledgement,
/// everything else runs the timer and returns its serialized report.
pub async fn handle_event(handler: &TimerHandler, payload: &Value) -> Result<Value> {
    match Invocation::classify(payload) {
        Invocation::Http => Ok(http_acknowledgement()),
        Invocation::Scheduled => {
            let report = handler.run().await;
            Ok(serde_json::to_value(report)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_url_event_is_http() {
        let event = json!({
            "version": "2.0",
            "rawPath": "/anything",
            "requestContext": {
                "http": { "method": "POST", "path": "/anything" }
            },
            "body": "ignored"
        });

        assert_eq!(Invocation::classify(&event), Invocation::Http);
    }

    #[test]
    fn test_eventbridge_event_is_scheduled() {
        let event = json!({
            "id": "cdc73f9d-aea9-11e3-9d5a-835b769c0d9c",
            "detail-type": "Scheduled Event",
            "source": "aws.events",
            "time": "2026-10-16T12:00:00Z",
            "detail": {}
        });

        assert_eq!(Invocation::classify(&event), Invocation::Scheduled);
        assert_eq!(Invocation::classify(&json!({})), Invocation::Scheduled);
        assert_eq!(Invocation::classify(&Value::Null), Invocation::Scheduled);
    }

    #[test]
    fn test_http_acknowledgement_shape() {
        let response = http_acknowledgement();

        assert_eq!(response["statusCode"], 200);
        assert_eq!(response["body"], ACKNOWLEDGEMENT);
        assert_eq!(response["headers"]["content-type"], "text/plain; charset=utf-8");
    }
}
