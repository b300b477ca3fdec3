use crate::transcript::{Speaker, Transcript};

/// Fallback shown when the webhook returns no usable reply
pub const NO_REPLY_FALLBACK: &str = "Sorry, I didn't get a valid response.";

/// Quick-reply diet options offered before the first turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietOption {
    Vegan,
    Keto,
    GlutenFree,
    Paleo,
}

impl DietOption {
    pub const VALUES: &[DietOption] = &[
        DietOption::Vegan,
        DietOption::Keto,
        DietOption::GlutenFree,
        DietOption::Paleo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DietOption::Vegan => "Vegan",
            DietOption::Keto => "Keto",
            DietOption::GlutenFree => "Gluten-Free",
            DietOption::Paleo => "Paleo",
        }
    }

    /// The utterance a quick reply expands to
    pub fn utterance(&self) -> String {
        format!("I follow a {} diet", self.label())
    }
}

impl std::fmt::Display for DietOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Session state machine driving one chat turn at a time
///
/// Two independent flags beside the transcript:
/// - `options_visible` starts true and is cleared permanently on the first
///   accepted submission.
/// - `awaiting_response` is true for the entire span between an accepted
///   submission and the terminal outcome of its round trip. While it is
///   true, further submissions are rejected; at most one round trip may be
///   outstanding.
#[derive(Debug, Clone)]
pub struct ChatSession {
    transcript: Transcript,
    options_visible: bool,
    awaiting_response: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self { transcript: Transcript::new(), options_visible: true, awaiting_response: false }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn options_visible(&self) -> bool {
        self.options_visible
    }

    pub fn awaiting_response(&self) -> bool {
        self.awaiting_response
    }

    /// Accept a submission, or refuse it without touching any state
    ///
    /// Returns the trimmed utterance to send when accepted. Empty or
    /// whitespace-only input is a silent no-op, and a submission while a
    /// round trip is outstanding is rejected rather than queued. On
    /// acceptance the user turn is appended, `awaiting_response` is set,
    /// and the quick-reply options are hidden for the rest of the session.
    pub fn begin_submission(&mut self, input: &str) -> Option<String> {
        let utterance = input.trim();
        if utterance.is_empty() {
            return None;
        }
        if self.awaiting_response {
            tracing::debug!(utterance, "submission rejected: round trip outstanding");
            return None;
        }

        tracing::debug!(speaker = Speaker::User.as_str(), utterance, "turn appended");
        self.transcript.push_user(utterance);
        self.awaiting_response = true;
        self.options_visible = false;
        Some(utterance.to_string())
    }

    /// Terminal step of a successful round trip
    ///
    /// Appends one bot turn per reply string, preserving order, then clears
    /// `awaiting_response`. Callers pass the already-normalized sequence, so
    /// an empty vector here still clears the flag without appending.
    pub fn complete_round_trip(&mut self, replies: Vec<String>) {
        for reply in replies {
            self.transcript.push_bot(reply);
        }
        self.awaiting_response = false;
    }

    /// Terminal step of a failed round trip
    ///
    /// The failure is always converted into one visible bot turn so the
    /// conversation never stalls silently, and `awaiting_response` is
    /// cleared on this path too.
    pub fn fail_round_trip(&mut self, description: &str) {
        self.transcript.push_bot(format!("Error: {}", description));
        self.awaiting_response = false;
    }
}
