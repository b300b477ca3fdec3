use crate::types::WebhookResponse;
use nutrichat_core::NO_REPLY_FALLBACK;

/// Normalize a raw webhook response into the bot reply sequence
///
/// `messages` wins when present and non-empty; otherwise a non-empty
/// `fulfillmentText` becomes a one-element sequence. The fallback string is
/// substituted only when no candidates were extracted at all. A candidate
/// sequence whose entries are all empty yields zero replies, not the
/// fallback: empty entries are dropped without error, matching the original
/// widget.
pub fn normalize_reply(raw: &WebhookResponse) -> Vec<String> {
    let candidates: Vec<String> = match &raw.messages {
        Some(messages) if !messages.is_empty() => messages.clone(),
        _ => raw.fulfillment_text.iter().filter(|text| !text.is_empty()).cloned().collect(),
    };

    if candidates.is_empty() {
        return vec![NO_REPLY_FALLBACK.to_string()];
    }

    let total = candidates.len();
    let replies: Vec<String> = candidates.into_iter().filter(|m| !m.is_empty()).collect();
    if replies.len() < total {
        tracing::debug!(dropped = total - replies.len(), "dropped empty webhook reply entries");
    }
    replies
}
