use crate::{state::AppState, theme::Theme};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use nutrichat_core::DietOption;

/// Quick-reply row shown only before the first turn
///
/// One button per diet option; the highlighted one is submitted with Enter.
pub struct QuickReplies<'a> {
    state: &'a AppState,
}

impl<'a> QuickReplies<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Render the quick-reply buttons to the given frame
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        if area.height == 0 {
            return;
        }

        let selected = self.state.selected_diet();
        let mut spans = Vec::new();
        for (idx, option) in DietOption::VALUES.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw("  "));
            }
            let label = format!(" {} ", option.label());
            let style = if *option == selected {
                Style::default().fg(Theme::BG).bg(Theme::GREEN).bold()
            } else {
                Style::default().fg(Theme::GREEN).bg(Theme::PANEL_BG)
            };
            spans.push(Span::styled(label, style));
        }

        let row_y = area.y + area.height / 2;
        let row = Rect { x: area.x, y: row_y, width: area.width, height: 1 };
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center).style(Theme::base()),
            row,
        );
    }
}
