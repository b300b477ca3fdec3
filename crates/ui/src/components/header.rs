use crate::{state::AppState, theme::Theme};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Header component: app title on the left, endpoint host on the right
pub struct Header<'a> {
    state: &'a AppState,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Render header to the given frame
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let title = Line::from(vec![
            Span::styled(" NutriBot ", Style::default().fg(Theme::BG).bg(Theme::GREEN).bold()),
            Span::styled(" nutrition assistant", Theme::muted()),
        ]);
        frame.render_widget(Paragraph::new(title).style(Theme::base()), area);

        let endpoint = Paragraph::new(Span::styled(endpoint_host(&self.state.endpoint), Theme::muted()))
            .alignment(Alignment::Right);
        frame.render_widget(endpoint, area);
    }
}

/// Host portion of the endpoint URL, for display only
fn endpoint_host(endpoint: &str) -> String {
    let trimmed = endpoint
        .strip_prefix("https://")
        .or_else(|| endpoint.strip_prefix("http://"))
        .unwrap_or(endpoint);
    trimmed.split('/').next().unwrap_or(trimmed).to_string()
}
