use std::io::Result;
use std::sync::Arc;
use std::{panic, time::Duration};

use crossterm::event::Event;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

use crate::components::{Footer, Header, QuickReplies, TranscriptView};
use crate::event_handler::{EventHandler, KeyAction};
use crate::layout::TuiLayout;
use crate::state::AppState;
use nutrichat_client::WebhookService;
use nutrichat_controller::{TurnEvent, spawn_round_trip};

/// Main TUI application
///
/// Owns the session state and the webhook service. Round trips run on
/// spawned tasks and report back over an mpsc channel, so the render loop
/// stays responsive while a response is outstanding.
pub struct App {
    state: AppState,
    service: Arc<dyn WebhookService>,
    turn_tx: mpsc::UnboundedSender<TurnEvent>,
    turn_rx: mpsc::UnboundedReceiver<TurnEvent>,
    pub should_exit: bool,
}

impl App {
    /// Create a new application
    pub fn new(state: AppState, service: Arc<dyn WebhookService>) -> Self {
        let (turn_tx, turn_rx) = mpsc::unbounded_channel();
        Self { state, service, turn_tx, turn_rx, should_exit: false }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Handle a terminal event
    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event
            && let Some(action) = EventHandler::handle_key_event(key, &mut self.state)
        {
            self.apply_action(action);
        }
    }

    fn apply_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_exit = true,
            KeyAction::Submit(text) => self.submit(&text),
            KeyAction::QuickReply(option) => self.submit(&option.utterance()),
        }
    }

    /// Run one submission through the session state machine
    ///
    /// `begin_submission` enforces the contract: empty input and
    /// busy-session submissions are refused without side effects, so the
    /// spawned round trip only ever exists for an accepted turn.
    fn submit(&mut self, input: &str) {
        if let Some(utterance) = self.state.session.begin_submission(input) {
            self.state.follow = true;
            spawn_round_trip(self.service.clone(), utterance, self.turn_tx.clone());
        }
    }

    /// Handle the terminal event of a round trip
    pub fn handle_turn_event(&mut self, event: TurnEvent) {
        match event {
            TurnEvent::Replies(replies) => self.state.session.complete_round_trip(replies),
            TurnEvent::Failed(description) => self.state.session.fail_round_trip(&description),
        }
        self.state.follow = true;
    }

    /// Draw the UI
    pub fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        terminal.draw(|frame| {
            let size = frame.area();
            let layout = TuiLayout::calculate(size, self.state.session.options_visible());

            Header::new(&self.state).render(frame, layout.header);

            if let Some(area) = layout.quick_replies {
                QuickReplies::new(&self.state).render(frame, area);
            }

            TranscriptView::render(frame, layout.transcript, &mut self.state);

            Footer::new(&self.state).render(frame, layout.footer);
        })?;

        Ok(())
    }

    /// Run the TUI event loop until the user exits
    pub async fn run(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(std::io::stdout(), crossterm::terminal::EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(std::io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let backend = CrosstermBackend::new(std::io::stdout());
            if let Ok(mut terminal) = Terminal::new(backend) {
                let _ = terminal.show_cursor();
            }
            let _ = crossterm::terminal::disable_raw_mode();
            let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        terminal.clear()?;
        self.draw(&mut terminal)?;

        while !self.should_exit {
            let tui_poll = async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                EventHandler::read()
            };

            tokio::select! {
                maybe_event = tui_poll => {
                    if let Ok(Some(event)) = maybe_event {
                        self.handle_event(event);
                        self.draw(&mut terminal)?;
                    }
                }
                maybe_turn = self.turn_rx.recv() => {
                    if let Some(event) = maybe_turn {
                        self.handle_turn_event(event);
                        self.draw(&mut terminal)?;
                    }
                }
            }
        }

        terminal.show_cursor()?;
        crossterm::terminal::disable_raw_mode()?;
        crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;

        Ok(())
    }
}
