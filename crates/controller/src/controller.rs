use std::sync::Arc;
use tokio::sync::mpsc;

use nutrichat_client::WebhookService;
use nutrichat_core::{ChatSession, DietOption};

/// Terminal outcome of one driven submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty or whitespace-only input; nothing happened
    Ignored,
    /// A round trip was already outstanding; submission rejected
    Busy,
    /// Round trip succeeded and the replies were appended
    Replied,
    /// Round trip failed; the failure is visible as a bot turn
    Failed,
}

/// Terminal event of a round trip spawned for the UI
#[derive(Debug, Clone)]
pub enum TurnEvent {
    /// Normalized bot replies, in order
    Replies(Vec<String>),
    /// Failure description to embed in the error turn
    Failed(String),
}

/// Spawn one webhook round trip and deliver its terminal event
///
/// The caller has already accepted the submission (user turn appended,
/// `awaiting_response` set); this only performs the call. The event is sent
/// exactly once, success or failure, so the receiver can always clear the
/// flag. Used by the TUI to keep the render loop responsive.
pub fn spawn_round_trip(service: Arc<dyn WebhookService>, utterance: String, tx: mpsc::UnboundedSender<TurnEvent>) {
    tokio::spawn(async move {
        let event = match service.send(&utterance).await {
            Ok(replies) => TurnEvent::Replies(replies),
            Err(e) => {
                tracing::warn!(error = %e, "webhook round trip failed");
                TurnEvent::Failed(e.to_string())
            }
        };
        let _ = tx.send(event);
    });
}

/// Drives chat turns against a webhook service
///
/// Owns the session state machine and performs whole round trips inline.
/// The non-interactive CLI path uses this directly; the TUI shares the same
/// `ChatSession` contract but runs the call on a spawned task instead.
pub struct TurnController {
    session: ChatSession,
    service: Arc<dyn WebhookService>,
}

impl TurnController {
    pub fn new(service: Arc<dyn WebhookService>) -> Self {
        Self { session: ChatSession::new(), service }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Submit one utterance and run its round trip to completion
    pub async fn submit(&mut self, input: &str) -> SubmitOutcome {
        if input.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        let Some(utterance) = self.session.begin_submission(input) else {
            return SubmitOutcome::Busy;
        };

        match self.service.send(&utterance).await {
            Ok(replies) => {
                self.session.complete_round_trip(replies);
                SubmitOutcome::Replied
            }
            Err(e) => {
                tracing::warn!(error = %e, "webhook round trip failed");
                self.session.fail_round_trip(&e.to_string());
                SubmitOutcome::Failed
            }
        }
    }

    /// Submit the utterance a quick-reply option expands to
    pub async fn quick_reply(&mut self, option: DietOption) -> SubmitOutcome {
        self.submit(&option.utterance()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrichat_client::MockService;
    use nutrichat_core::Speaker;

    #[tokio::test]
    async fn test_submit_appends_user_turn_before_call() {
        let mock = Arc::new(MockService::replying(vec!["reply"]));
        let mut controller = TurnController::new(mock.clone());

        let outcome = controller.submit("Track Meal").await;
        assert_eq!(outcome, SubmitOutcome::Replied);
        assert_eq!(mock.sent(), vec!["Track Meal"]);

        let turns = controller.session().transcript().turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].speaker, Speaker::User);
        assert_eq!(turns[0].text, "Track Meal");
        assert_eq!(turns[1].speaker, Speaker::Bot);
        assert_eq!(turns[1].text, "reply");
    }

    #[tokio::test]
    async fn test_empty_input_ignored_no_call() {
        let mock = Arc::new(MockService::replying(vec!["never"]));
        let mut controller = TurnController::new(mock.clone());

        assert_eq!(controller.submit("   ").await, SubmitOutcome::Ignored);
        assert!(mock.sent().is_empty());
        assert!(controller.session().transcript().is_empty());
    }

    #[tokio::test]
    async fn test_multiple_replies_preserve_order() {
        let mock = Arc::new(MockService::replying(vec!["A", "B"]));
        let mut controller = TurnController::new(mock);

        controller.submit("hello").await;
        let turns = controller.session().transcript().turns();
        assert_eq!(turns[1].text, "A");
        assert_eq!(turns[2].text, "B");
    }

    #[tokio::test]
    async fn test_failure_becomes_visible_bot_turn() {
        let mock = Arc::new(MockService::failing("service unavailable"));
        let mut controller = TurnController::new(mock);

        let outcome = controller.submit("hello").await;
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert!(!controller.session().awaiting_response());

        let turns = controller.session().transcript().turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[1].speaker, Speaker::Bot);
        assert!(turns[1].text.contains("service unavailable"));
    }

    #[tokio::test]
    async fn test_quick_reply_matches_submit() {
        let mock_a = Arc::new(MockService::replying(vec!["great"]));
        let mut via_quick_reply = TurnController::new(mock_a);
        via_quick_reply.quick_reply(DietOption::Vegan).await;

        let mock_b = Arc::new(MockService::replying(vec!["great"]));
        let mut via_submit = TurnController::new(mock_b);
        via_submit.submit("I follow a Vegan diet").await;

        let a: Vec<_> = via_quick_reply
            .session()
            .transcript()
            .turns()
            .iter()
            .map(|t| (t.speaker, t.text.clone()))
            .collect();
        let b: Vec<_> = via_submit
            .session()
            .transcript()
            .turns()
            .iter()
            .map(|t| (t.speaker, t.text.clone()))
            .collect();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_options_hidden_after_first_submission() {
        let mock = Arc::new(MockService::new(vec![
            nutrichat_client::ScriptedRoundTrip::Failure("down".to_string()),
            nutrichat_client::ScriptedRoundTrip::Replies(vec!["up".to_string()]),
        ]));
        let mut controller = TurnController::new(mock);

        assert!(controller.session().options_visible());
        controller.submit("first").await;
        assert!(!controller.session().options_visible());
        controller.submit("second").await;
        assert!(!controller.session().options_visible());
    }

    #[tokio::test]
    async fn test_spawn_round_trip_delivers_replies() {
        let mock: Arc<dyn WebhookService> = Arc::new(MockService::replying(vec!["A", "B"]));
        let (tx, mut rx) = mpsc::unbounded_channel();

        spawn_round_trip(mock, "hello".to_string(), tx);
        match rx.recv().await.unwrap() {
            TurnEvent::Replies(replies) => assert_eq!(replies, vec!["A", "B"]),
            TurnEvent::Failed(e) => panic!("unexpected failure: {}", e),
        }
    }

    #[tokio::test]
    async fn test_spawn_round_trip_delivers_failure() {
        let mock: Arc<dyn WebhookService> = Arc::new(MockService::failing("boom"));
        let (tx, mut rx) = mpsc::unbounded_channel();

        spawn_round_trip(mock, "hello".to_string(), tx);
        match rx.recv().await.unwrap() {
            TurnEvent::Failed(description) => assert!(description.contains("boom")),
            TurnEvent::Replies(_) => panic!("expected failure"),
        }
    }
}
