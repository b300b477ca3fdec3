use crate::{state::AppState, theme::Theme};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// Footer component: input card with accent bar plus a hints row
pub struct Footer<'a> {
    state: &'a AppState,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Render footer to the given frame
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        if area.height < 2 || area.width < 10 {
            return;
        }

        let input_area = Rect { x: area.x, y: area.y, width: area.width, height: area.height - 1 };
        let hints_area = Rect { x: area.x, y: area.y + area.height - 1, width: area.width, height: 1 };

        self.render_input_card(frame, input_area);
        self.render_hints(frame, hints_area);
    }

    fn render_input_card(&self, frame: &mut Frame<'_>, area: Rect) {
        let panel_block = Block::default().style(Style::default().bg(Theme::PANEL_BG));
        frame.render_widget(panel_block, area);

        let accent_width = 2;
        let accent_area = Rect { x: area.x, y: area.y, width: accent_width, height: area.height };
        let accent_color = if self.state.input_enabled() { Theme::BLUE } else { Theme::MUTED };
        frame.render_widget(Block::default().style(Style::default().bg(accent_color)), accent_area);

        let text_area = Rect {
            x: area.x + accent_width + 1,
            y: area.y + area.height / 2,
            width: area.width.saturating_sub(accent_width + 2),
            height: 1,
        };

        if !self.state.input_enabled() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "Pick a diet above to start the conversation",
                    Style::default().fg(Theme::MUTED).bg(Theme::PANEL_BG),
                )),
                text_area,
            );
            return;
        }

        let input = &self.state.input;
        let mut spans = Vec::new();
        if input.buffer.is_empty() {
            spans.push(Span::styled(
                "Type a message e.g., Track Meal, Recommend Recipes...",
                Style::default().fg(Theme::MUTED).bg(Theme::PANEL_BG),
            ));
        } else {
            let cursor = input.cursor.min(input.buffer.len());
            let before = &input.buffer[..cursor];
            let after = &input.buffer[cursor..];
            let text_style = Style::default().fg(Theme::FG).bg(Theme::PANEL_BG);

            if !before.is_empty() {
                spans.push(Span::styled(before.to_string(), text_style));
            }
            spans.push(Span::styled("█", Style::default().fg(Theme::FG).bg(Theme::PANEL_BG)));
            if !after.is_empty() {
                spans.push(Span::styled(after.to_string(), text_style));
            }
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), text_area);

        let col = self.state.input.buffer[..self.state.input.cursor.min(self.state.input.buffer.len())].width() + 1;
        let cursor_text = format!("1:{} ", col);
        frame.render_widget(
            Paragraph::new(Span::styled(cursor_text, Style::default().fg(Theme::MUTED).bg(Theme::PANEL_BG)))
                .alignment(Alignment::Right),
            text_area,
        );
    }

    fn render_hints(&self, frame: &mut Frame<'_>, area: Rect) {
        let mut spans = Vec::new();

        if self.state.is_thinking() {
            spans.push(Span::styled("Thinking... ", Theme::loading()));
        } else if self.state.session.options_visible() {
            spans.push(Span::styled("[←→]", Style::default().fg(Theme::BLUE)));
            spans.push(Span::styled(" choose  ", Theme::muted()));
            spans.push(Span::styled("[Enter]", Style::default().fg(Theme::BLUE)));
            spans.push(Span::styled(" select  ", Theme::muted()));
        } else {
            spans.push(Span::styled("[Enter]", Style::default().fg(Theme::BLUE)));
            spans.push(Span::styled(" send  ", Theme::muted()));
            spans.push(Span::styled("[PgUp/PgDn]", Style::default().fg(Theme::BLUE)));
            spans.push(Span::styled(" scroll  ", Theme::muted()));
        }
        spans.push(Span::styled("[Esc]", Style::default().fg(Theme::BLUE)));
        spans.push(Span::styled(" exit", Theme::muted()));

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Theme::base()).alignment(Alignment::Right),
            area,
        );
    }
}
