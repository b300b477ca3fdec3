use serde::{Deserialize, Serialize};

/// Outbound webhook request body
///
/// `{ "queryResult": { "intent": { "displayName": <utterance> }, "queryText": <utterance> } }`
#[derive(Debug, Clone, Serialize)]
pub struct WebhookRequest {
    #[serde(rename = "queryResult")]
    pub query_result: QueryResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    pub intent: Intent,
    #[serde(rename = "queryText")]
    pub query_text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Intent {
    #[serde(rename = "displayName")]
    pub display_name: String,
}

impl WebhookRequest {
    /// Build the request body for one utterance; both fields carry it
    pub fn new(utterance: impl Into<String>) -> Self {
        let utterance = utterance.into();
        Self {
            query_result: QueryResult {
                intent: Intent { display_name: utterance.clone() },
                query_text: utterance,
            },
        }
    }
}

/// Inbound webhook response body
///
/// `messages` is preferred; `fulfillmentText` is the legacy single-string
/// fallback. Either or both may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookResponse {
    #[serde(default)]
    pub messages: Option<Vec<String>>,
    #[serde(default, rename = "fulfillmentText")]
    pub fulfillment_text: Option<String>,
}
