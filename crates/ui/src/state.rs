use nutrichat_core::{ChatSession, DietOption};

/// State for the input composer
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current input buffer
    pub buffer: String,
    /// Cursor position (byte offset; ASCII input)
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 && !self.buffer.is_empty() {
            let prev = self.buffer[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.buffer.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.buffer[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor += self.buffer[self.cursor..].chars().next().map(|c| c.len_utf8()).unwrap_or(0);
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Take the buffer, leaving the composer empty
    pub fn take(&mut self) -> String {
        let buffer = std::mem::take(&mut self.buffer);
        self.cursor = 0;
        buffer
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Chat session: transcript plus the two session flags
    pub session: ChatSession,
    /// Input composer state
    pub input: InputState,
    /// Currently highlighted quick-reply option
    pub selected_option: usize,
    /// Vertical scroll offset for the transcript (lines from the top)
    pub scroll: u16,
    /// Whether the transcript follows the latest turn
    pub follow: bool,
    /// Resolved webhook endpoint, shown in the header
    pub endpoint: String,
}

impl AppState {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            session: ChatSession::new(),
            input: InputState::new(),
            selected_option: 0,
            scroll: 0,
            follow: true,
            endpoint: endpoint.into(),
        }
    }

    /// The typed-input composer is enabled only after the first submission
    pub fn input_enabled(&self) -> bool {
        !self.session.options_visible()
    }

    /// Whether the loading indicator should be shown
    pub fn is_thinking(&self) -> bool {
        self.session.awaiting_response()
    }

    pub fn selected_diet(&self) -> DietOption {
        DietOption::VALUES[self.selected_option % DietOption::VALUES.len()]
    }

    pub fn select_next_option(&mut self) {
        self.selected_option = (self.selected_option + 1) % DietOption::VALUES.len();
    }

    pub fn select_prev_option(&mut self) {
        self.selected_option = (self.selected_option + DietOption::VALUES.len() - 1) % DietOption::VALUES.len();
    }

    /// Scroll the transcript up, detaching from the latest turn
    pub fn scroll_up(&mut self, delta: u16) {
        self.scroll = self.scroll.saturating_sub(delta);
        self.follow = false;
    }

    /// Scroll the transcript down; reaching the bottom re-attaches
    pub fn scroll_down(&mut self, delta: u16, max_scroll: u16) {
        self.scroll = (self.scroll + delta).min(max_scroll);
        if self.scroll >= max_scroll {
            self.follow = true;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(nutrichat_core::DEFAULT_ENDPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state_editing() {
        let mut input = InputState::new();

        input.insert_char('H');
        input.insert_char('i');
        assert_eq!(input.buffer, "Hi");
        assert_eq!(input.cursor, 2);

        input.backspace();
        assert_eq!(input.buffer, "H");
        assert_eq!(input.cursor, 1);

        input.move_home();
        assert_eq!(input.cursor, 0);
        input.move_end();
        assert_eq!(input.cursor, 1);

        let taken = input.take();
        assert_eq!(taken, "H");
        assert!(input.buffer.is_empty());
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_input_state_mid_buffer_edit() {
        let mut input = InputState::new();
        for c in "ABC".chars() {
            input.insert_char(c);
        }

        input.move_left();
        input.move_left();
        input.insert_char('X');
        assert_eq!(input.buffer, "AXBC");
        assert_eq!(input.cursor, 2);

        input.delete();
        assert_eq!(input.buffer, "AXC");
    }

    #[test]
    fn test_input_state_multibyte() {
        let mut input = InputState::new();
        input.insert_char('é');
        input.insert_char('!');
        assert_eq!(input.buffer, "é!");

        input.move_left();
        input.move_left();
        assert_eq!(input.cursor, 0);
        input.move_right();
        assert_eq!(input.cursor, 'é'.len_utf8());

        input.backspace();
        assert_eq!(input.buffer, "!");
    }

    #[test]
    fn test_input_enabled_follows_options_visibility() {
        let mut state = AppState::new("https://example.com/webhook");
        assert!(!state.input_enabled());

        state.session.begin_submission("I follow a Vegan diet");
        assert!(state.input_enabled());
    }

    #[test]
    fn test_thinking_tracks_awaiting_response() {
        let mut state = AppState::default();
        assert!(!state.is_thinking());

        state.session.begin_submission("hello");
        assert!(state.is_thinking());

        state.session.complete_round_trip(vec!["hi".to_string()]);
        assert!(!state.is_thinking());
    }

    #[test]
    fn test_option_selection_wraps() {
        let mut state = AppState::default();
        assert_eq!(state.selected_diet(), DietOption::Vegan);

        state.select_prev_option();
        assert_eq!(state.selected_diet(), DietOption::Paleo);

        state.select_next_option();
        state.select_next_option();
        assert_eq!(state.selected_diet(), DietOption::Keto);
    }

    #[test]
    fn test_scroll_detaches_and_reattaches() {
        let mut state = AppState::default();
        state.scroll = 5;

        state.scroll_up(2);
        assert_eq!(state.scroll, 3);
        assert!(!state.follow);

        state.scroll_down(10, 8);
        assert_eq!(state.scroll, 8);
        assert!(state.follow);
    }
}
