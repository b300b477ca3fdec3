use reqwest::Client as HttpClient;

use crate::normalize::normalize_reply;
use crate::types::{WebhookRequest, WebhookResponse};
use nutrichat_core::{Error, Result};

/// Transport seam for the chat turn round trip
///
/// One implementation talks to the real webhook; the mock in [`crate::mock`]
/// scripts responses for tests.
#[async_trait::async_trait]
pub trait WebhookService: Send + Sync {
    /// Perform one round trip and return the normalized reply sequence
    async fn send(&self, utterance: &str) -> Result<Vec<String>>;
}

/// HTTP client for the NutriBot webhook
///
/// One POST per turn. No retries, no explicit timeout, no cancellation: the
/// call resolves or rejects exactly once and the transport's own limits
/// govern worst-case latency.
pub struct WebhookClient {
    client: HttpClient,
    endpoint: String,
}

impl WebhookClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { client: HttpClient::new(), endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl WebhookService for WebhookClient {
    async fn send(&self, utterance: &str) -> Result<Vec<String>> {
        let body = WebhookRequest::new(utterance);
        tracing::debug!(endpoint = %self.endpoint, utterance, "posting chat turn");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::remote(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::remote(format!("webhook returned {}: {}", status, body)));
        }

        let raw: WebhookResponse = response
            .json()
            .await
            .map_err(|e| Error::remote(format!("invalid response body: {}", e)))?;

        let replies = normalize_reply(&raw);
        tracing::debug!(count = replies.len(), "webhook replied");
        Ok(replies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_endpoint() {
        let client = WebhookClient::new("https://example.com/webhook");
        assert_eq!(client.endpoint(), "https://example.com/webhook");
    }

    #[tokio::test]
    async fn test_unresolvable_endpoint_maps_to_remote_error() {
        // .invalid never resolves, so this fails fast without a server.
        let client = WebhookClient::new("http://webhook.invalid/webhook");
        let err = client.send("hello").await.unwrap_err();
        assert!(matches!(err, Error::RemoteCall(_)));
    }
}
