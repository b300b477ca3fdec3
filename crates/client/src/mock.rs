use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::webhook::WebhookService;
use nutrichat_core::{Error, Result};

/// One scripted round trip for the mock service
#[derive(Debug, Clone)]
pub enum ScriptedRoundTrip {
    /// Normalized replies returned as-is
    Replies(Vec<String>),
    /// Remote-call failure with the given description
    Failure(String),
}

/// Deterministic webhook stand-in for tests
///
/// Responses are consumed in order; once the script runs out, every further
/// call fails with a distinguishable description.
pub struct MockService {
    script: Vec<ScriptedRoundTrip>,
    current: AtomicUsize,
    sent: Mutex<Vec<String>>,
}

impl MockService {
    pub fn new(script: Vec<ScriptedRoundTrip>) -> Self {
        Self { script, current: AtomicUsize::new(0), sent: Mutex::new(Vec::new()) }
    }

    /// Shorthand for a single successful round trip
    pub fn replying(replies: Vec<&str>) -> Self {
        Self::new(vec![ScriptedRoundTrip::Replies(
            replies.into_iter().map(String::from).collect(),
        )])
    }

    /// Shorthand for a single failing round trip
    pub fn failing(description: &str) -> Self {
        Self::new(vec![ScriptedRoundTrip::Failure(description.to_string())])
    }

    /// Utterances received so far, in call order
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl WebhookService for MockService {
    async fn send(&self, utterance: &str) -> Result<Vec<String>> {
        self.sent.lock().unwrap().push(utterance.to_string());

        let index = self.current.fetch_add(1, Ordering::SeqCst);
        match self.script.get(index) {
            Some(ScriptedRoundTrip::Replies(replies)) => Ok(replies.clone()),
            Some(ScriptedRoundTrip::Failure(description)) => Err(Error::remote(description)),
            None => Err(Error::remote(format!(
                "no scripted response (requested: {}, available: {})",
                index + 1,
                self.script.len()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_replays_script_in_order() {
        let mock = MockService::new(vec![
            ScriptedRoundTrip::Replies(vec!["first".to_string()]),
            ScriptedRoundTrip::Failure("down".to_string()),
        ]);

        assert_eq!(mock.send("a").await.unwrap(), vec!["first"]);
        assert!(mock.send("b").await.is_err());
        assert_eq!(mock.sent(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_mock_exhausted_script_fails() {
        let mock = MockService::replying(vec!["only"]);
        mock.send("a").await.unwrap();

        let err = mock.send("b").await.unwrap_err();
        assert!(err.to_string().contains("no scripted response"));
    }

    #[tokio::test]
    async fn test_failing_shorthand() {
        let mock = MockService::failing("connection refused");
        let err = mock.send("a").await.unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }
}
