use crate::WebhookConfig;
use crate::error::Result;
use crate::parse::parse_webhook_event;
use axum::{Json, body::Bytes, extract::State};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info};
use voice_notify::classify_and_format;
use voice_telegram::deliver;

pub async fn handle_webhook(
    State(config): State<Arc<WebhookConfig>>,
    body: Bytes,
) -> Result<Json<Value>> {
    let event = parse_webhook_event(&body)?;

    info!(
        "Received {} webhook for project: {}",
        event.kind(),
        event.project.path
    );

    if config.chat_id == 0 {
        return Ok(Json(json!({ "message": "no chat id" })));
    }

    let notification = classify_and_format(&event);
    let outcome = deliver(config.gateway.as_ref(), config.chat_id, &notification).await;
    debug!("Webhook {} handled: {:?}", event.kind(), outcome);

    Ok(Json(json!("")))
}

/// Logs the raw request body. Handy for capturing sample payloads.
pub async fn handle_raw(body: Bytes) -> Json<Value> {
    info!("Raw webhook body: {}", String::from_utf8_lossy(&body));
    Json(json!(""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WebhookError;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use voice_telegram::{ChatGateway, TelegramError};

    #[derive(Default)]
    struct RecordingGateway {
        sent: Mutex<Vec<(i64, String)>>,
        fail: bool,
    }

    #[async_trait]
    impl ChatGateway for RecordingGateway {
        async fn send_message(&self, chat_id: i64, text: &str) -> voice_telegram::Result<()> {
            self.sent.lock().unwrap().push((chat_id, text.to_string()));
            if self.fail {
                return Err(TelegramError::EmptyResult);
            }
            Ok(())
        }
    }

    fn state(gateway: Arc<RecordingGateway>, chat_id: i64) -> State<Arc<WebhookConfig>> {
        State(Arc::new(WebhookConfig { gateway, chat_id }))
    }

    const MERGE_REQUEST_OPEN: &str = r#"{
        "object_kind": "merge_request",
        "user": {"username": "alice"},
        "project": {"path_with_namespace": "g/p", "web_url": "http://x/g/p"},
        "object_attributes": {
            "iid": 42,
            "title": "Fix bug",
            "url": "http://x/mr/42",
            "action": "open"
        }
    }"#;

    #[tokio::test]
    async fn test_webhook_delivers_message() {
        let gateway = Arc::new(RecordingGateway::default());

        let response = handle_webhook(
            state(gateway.clone(), -100),
            Bytes::from_static(MERGE_REQUEST_OPEN.as_bytes()),
        )
        .await
        .unwrap();

        assert_eq!(response.0, json!(""));
        let sent = gateway.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, -100);
        assert_eq!(
            sent[0].1,
            "alice\nopen MR [\\!42](http://x/mr/42) \"Fix bug\" at g/p"
        );
    }

    #[tokio::test]
    async fn test_webhook_without_chat_id() {
        let gateway = Arc::new(RecordingGateway::default());

        let response = handle_webhook(
            state(gateway.clone(), 0),
            Bytes::from_static(MERGE_REQUEST_OPEN.as_bytes()),
        )
        .await
        .unwrap();

        assert_eq!(response.0, json!({ "message": "no chat id" }));
        assert!(gateway.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_webhook_suppressed_event() {
        let gateway = Arc::new(RecordingGateway::default());
        let body = r#"{
            "object_kind": "pipeline",
            "object_attributes": {"ref": "main", "status": "running", "duration": null}
        }"#;

        let response = handle_webhook(state(gateway.clone(), 1), Bytes::from(body))
            .await
            .unwrap();

        assert_eq!(response.0, json!(""));
        assert!(gateway.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_webhook_malformed_note_is_accepted() {
        let gateway = Arc::new(RecordingGateway::default());
        let body = r#"{
            "object_kind": "note",
            "object_attributes": {"note": "hi", "noteable_type": "MergeRequest"}
        }"#;

        let response = handle_webhook(state(gateway.clone(), 1), Bytes::from(body)).await;

        assert!(response.is_ok());
        assert!(gateway.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_webhook_delivery_failure_still_ok() {
        let gateway = Arc::new(RecordingGateway {
            fail: true,
            ..Default::default()
        });

        let response = handle_webhook(
            state(gateway.clone(), 1),
            Bytes::from_static(MERGE_REQUEST_OPEN.as_bytes()),
        )
        .await;

        assert!(response.is_ok());
        assert_eq!(gateway.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_webhook_rejects_invalid_json() {
        let gateway = Arc::new(RecordingGateway::default());

        let response = handle_webhook(state(gateway, 1), Bytes::from_static(b"not json")).await;

        assert!(matches!(response, Err(WebhookError::Json(_))));
    }

    #[tokio::test]
    async fn test_raw_webhook() {
        let response = handle_raw(Bytes::from_static(b"{\"object_kind\":\"push\"}")).await;
        assert_eq!(response.0, json!(""));
    }
}
