//! HTTP client for the form-relay endpoint.
//!
//! One outbound JSON POST per submission; the response carries a boolean
//! `success` and an optional human-readable `message`. Transport failures
//! and unparsable bodies collapse into a single fixed error message. The
//! request runs on the tokio runtime and the outcome is dropped into a
//! shared mailbox the draw loop polls between frames.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::RelayConfig;

/// Fixed message for network/parse failures
pub const TRANSPORT_FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";

/// Fixed message when the relay rejects without saying why
pub const REJECTED_FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// Fixed message when no relay is configured at all
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Contact relay is not configured. Set FOLIO_RELAY_ACCESS_KEY and FOLIO_RELAY_TO_EMAIL.";

/// Label prepended to the user-supplied subject line
pub const SUBJECT_PREFIX: &str = "Portfolio Contact: ";

const CONNECT_TIMEOUT_SECS: u64 = 8;
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),
}

/// A filled-out form snapshot ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Wire payload for the relay endpoint
#[derive(Debug, Serialize)]
struct RelayPayload<'a> {
    access_key: &'a str,
    to_email: &'a str,
    from_name: &'a str,
    email: &'a str,
    subject: String,
    message: &'a str,
}

/// Relay response body; anything beyond these fields is ignored
#[derive(Debug, Clone, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Delivery outcome of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    Delivered,
    /// The relay answered but refused; carries the message to display
    Rejected(String),
    TransportFailed,
}

impl SubmitResult {
    /// Map a parsed relay response to an outcome
    pub fn from_response(response: RelayResponse) -> Self {
        if response.success {
            SubmitResult::Delivered
        } else {
            let message = response
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| REJECTED_FALLBACK_MESSAGE.to_string());
            SubmitResult::Rejected(message)
        }
    }
}

/// Mailbox the submit task reports back through
pub type SubmitMailbox = Arc<Mutex<Option<SubmitResult>>>;

/// Client for the form-relay endpoint
#[derive(Clone)]
pub struct RelayClient {
    endpoint: String,
    access_key: String,
    to_email: String,
    http: reqwest::Client,
}

impl RelayClient {
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            endpoint: config.endpoint,
            access_key: config.access_key,
            to_email: config.to_email,
            http,
        })
    }

    /// Deliver one message. Never errors out: every failure mode folds
    /// into a `SubmitResult` the form can display.
    pub async fn submit(&self, msg: &OutboundMessage) -> SubmitResult {
        match self.post(msg).await {
            Ok(response) => SubmitResult::from_response(response),
            Err(_) => SubmitResult::TransportFailed,
        }
    }

    async fn post(&self, msg: &OutboundMessage) -> Result<RelayResponse, RelayError> {
        let payload = RelayPayload {
            access_key: &self.access_key,
            to_email: &self.to_email,
            from_name: &msg.name,
            email: &msg.email,
            subject: format!("{}{}", SUBJECT_PREFIX, msg.subject),
            message: &msg.message,
        };
        let response = self.http.post(&self.endpoint).json(&payload).send().await?;
        Ok(response.json::<RelayResponse>().await?)
    }
}

/// Run one submission on the runtime, delivering the outcome into the
/// mailbox. The draw loop picks it up via `App::poll_submit`.
pub fn spawn_submit(
    handle: &tokio::runtime::Handle,
    client: RelayClient,
    msg: OutboundMessage,
    mailbox: SubmitMailbox,
) {
    handle.spawn(async move {
        let result = client.submit(&msg).await;
        if let Ok(mut slot) = mailbox.lock() {
            *slot = Some(result);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_delivers() {
        let response: RelayResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(SubmitResult::from_response(response), SubmitResult::Delivered);
    }

    #[test]
    fn test_rejection_carries_server_message() {
        let response: RelayResponse =
            serde_json::from_str(r#"{"success": false, "message": "Invalid key"}"#).unwrap();
        assert_eq!(
            SubmitResult::from_response(response),
            SubmitResult::Rejected("Invalid key".to_string())
        );
    }

    #[test]
    fn test_rejection_without_message_uses_fallback() {
        for body in [r#"{"success": false}"#, r#"{"success": false, "message": ""}"#] {
            let response: RelayResponse = serde_json::from_str(body).unwrap();
            assert_eq!(
                SubmitResult::from_response(response),
                SubmitResult::Rejected(REJECTED_FALLBACK_MESSAGE.to_string())
            );
        }
    }

    #[test]
    fn test_extra_response_fields_are_ignored() {
        let response: RelayResponse =
            serde_json::from_str(r#"{"success": true, "message": "ok", "data": {"id": 1}}"#)
                .unwrap();
        assert!(response.success);
    }

    #[test]
    fn test_payload_shape_and_subject_prefix() {
        let payload = RelayPayload {
            access_key: "key",
            to_email: "me@example.com",
            from_name: "John Doe",
            email: "john@example.com",
            subject: format!("{}{}", SUBJECT_PREFIX, "Hello"),
            message: "Hi there",
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["access_key"], "key");
        assert_eq!(json["to_email"], "me@example.com");
        assert_eq!(json["from_name"], "John Doe");
        assert_eq!(json["subject"], "Portfolio Contact: Hello");
        assert_eq!(json["message"], "Hi there");
    }
}
