use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::Result;

use crate::state::AppState;
use nutrichat_core::DietOption;

/// Actions the event loop acts on after key translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Submit the typed utterance
    Submit(String),
    /// Submit the selected quick-reply option
    QuickReply(DietOption),
    /// Exit the application
    Quit,
}

/// Event handler for the TUI application
pub struct EventHandler;

impl EventHandler {
    /// Read a single event from the terminal, if one is pending
    pub fn read() -> Result<Option<Event>> {
        match crossterm::event::poll(std::time::Duration::from_millis(0)) {
            Ok(true) => Ok(Some(crossterm::event::read()?)),
            _ => Ok(None),
        }
    }

    /// Handle a keyboard event, mutating editing state and returning an
    /// action where one applies
    pub fn handle_key_event(event: KeyEvent, state: &mut AppState) -> Option<KeyAction> {
        if event.kind != KeyEventKind::Press {
            return None;
        }

        if event.code == KeyCode::Esc {
            return Some(KeyAction::Quit);
        }
        if event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(KeyAction::Quit);
        }

        match event.code {
            KeyCode::PageUp => {
                state.scroll_up(5);
                return None;
            }
            KeyCode::PageDown => {
                // Max scroll is only known at render time; clamp there.
                state.scroll_down(5, u16::MAX);
                return None;
            }
            _ => {}
        }

        if state.session.options_visible() {
            Self::handle_quick_reply_key(event, state)
        } else {
            Self::handle_composer_key(event, state)
        }
    }

    /// Keys while the quick-reply row is shown (before the first turn)
    ///
    /// The typed composer is disabled in this phase, matching the original
    /// widget: the conversation starts from one of the diet options.
    fn handle_quick_reply_key(event: KeyEvent, state: &mut AppState) -> Option<KeyAction> {
        match event.code {
            KeyCode::Left | KeyCode::BackTab => {
                state.select_prev_option();
                None
            }
            KeyCode::Right | KeyCode::Tab => {
                state.select_next_option();
                None
            }
            KeyCode::Enter => Some(KeyAction::QuickReply(state.selected_diet())),
            _ => None,
        }
    }

    /// Keys for the input composer (after the first turn)
    fn handle_composer_key(event: KeyEvent, state: &mut AppState) -> Option<KeyAction> {
        match event.code {
            KeyCode::Enter => {
                // Send action is disabled while a round trip is outstanding.
                if state.session.awaiting_response() || state.input.buffer.trim().is_empty() {
                    return None;
                }
                Some(KeyAction::Submit(state.input.take()))
            }
            KeyCode::Char(c) => {
                state.input.insert_char(c);
                None
            }
            KeyCode::Backspace => {
                state.input.backspace();
                None
            }
            KeyCode::Delete => {
                state.input.delete();
                None
            }
            KeyCode::Left => {
                state.input.move_left();
                None
            }
            KeyCode::Right => {
                state.input.move_right();
                None
            }
            KeyCode::Home => {
                state.input.move_home();
                None
            }
            KeyCode::End => {
                state.input.move_end();
                None
            }
            _ => None,
        }
    }
}
