// Automation webhook integration for PRD enrichment

pub mod standin;

use std::time::Duration;

use log::{error, info, warn};
use thiserror::Error;
use url::Url;

use crate::models::{WebhookPayload, WebhookResponse};

/// Hostnames recognized by the configuration sanity check
const KNOWN_WEBHOOK_HOSTS: [&str; 2] = ["hook.make.com", "hook.us2.make.com"];

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Network error: Unable to connect to the automation webhook. Please check your internet connection.")]
    Network(#[source] reqwest::Error),

    #[error("Failed to send webhook request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Webhook failed with status: {status} - {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// How a raw webhook response body should be treated
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseKind {
    /// The remote accepted the job asynchronously and sent no payload
    Acknowledged,
    /// The remote answered synchronously with a usable payload
    Payload(WebhookResponse),
    /// Anything else: plain text, markdown, malformed or mis-shaped JSON
    Unrecognized,
}

/// Classifies a response body. Total: every possible body maps to a variant,
/// so the fallback policy stays independent of the HTTP call.
pub fn classify_response(body: &str) -> ResponseKind {
    let trimmed = body.trim();

    if trimmed == "Accepted" {
        return ResponseKind::Acknowledged;
    }

    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return match serde_json::from_str::<WebhookResponse>(trimmed) {
            Ok(response) => ResponseKind::Payload(response),
            Err(e) => {
                warn!("Webhook body looked like JSON but did not parse: {}", e);
                ResponseKind::Unrecognized
            }
        };
    }

    ResponseKind::Unrecognized
}

/// Returns true only for https URLs on a recognized automation host.
///
/// Used as a configuration sanity check; the live call is not gated on it.
pub fn validate_webhook_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => {
            parsed.scheme() == "https"
                && parsed
                    .host_str()
                    .map(|host| KNOWN_WEBHOOK_HOSTS.contains(&host))
                    .unwrap_or(false)
        }
        Err(_) => false,
    }
}

/// Client for the PRD enrichment webhook
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: reqwest::Client,
    webhook_url: String,
    standin_delay: Duration,
}

impl WebhookClient {
    /// Create a new webhook client. `standin_delay` is awaited before a
    /// locally enriched response is returned, simulating remote processing.
    pub fn new(webhook_url: String, standin_delay: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url,
            standin_delay,
        }
    }

    /// Sends the PRD payload to the webhook. Single attempt, no retries, no
    /// timeout; the call settles when the remote answers.
    ///
    /// Unusable success bodies (async acknowledgement, plain text, bad JSON)
    /// resolve through the local enrichment stand-in instead of failing.
    pub async fn send_prd_to_webhook(
        &self,
        payload: &WebhookPayload,
    ) -> Result<WebhookResponse, WebhookError> {
        info!("Sending PRD {} to enrichment webhook", payload.prd_id);

        let response = self
            .client
            .post(&self.webhook_url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    WebhookError::Network(e)
                } else {
                    WebhookError::Request(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Webhook returned {} for PRD {}", status, payload.prd_id);
            return Err(WebhookError::Status { status, body });
        }

        let body = response.text().await.map_err(WebhookError::Request)?;

        match classify_response(&body) {
            ResponseKind::Payload(parsed) => {
                info!("Webhook answered synchronously for PRD {}", payload.prd_id);
                Ok(parsed)
            }
            ResponseKind::Acknowledged => {
                info!(
                    "Webhook acknowledged PRD {} for async processing, enriching locally",
                    payload.prd_id
                );
                Ok(standin::standin_response(payload, self.standin_delay).await)
            }
            ResponseKind::Unrecognized => {
                warn!(
                    "Unrecognized webhook response for PRD {}, enriching locally",
                    payload.prd_id
                );
                Ok(standin::standin_response(payload, self.standin_delay).await)
            }
        }
    }
}
