use crate::{state::AppState, theme::Theme};
use ratatui::{
    Frame,
    layout::Rect,
    style::Stylize,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use nutrichat_core::{Speaker, Turn};

const BULLET: &str = "• ";

/// Conversation view
///
/// User turns render as right-aligned inline blocks; bot turns render
/// left-aligned, and a bot turn with internal line breaks is presented as a
/// bulleted list, one bullet per non-empty segment. Presentation only: the
/// stored turn text is never changed.
pub struct TranscriptView;

impl TranscriptView {
    /// Render the transcript, clamping the scroll offset to the content
    pub fn render(frame: &mut Frame<'_>, area: Rect, state: &mut AppState) {
        if area.width < 4 || area.height == 0 {
            return;
        }

        let width = area.width.saturating_sub(2) as usize;
        let mut lines = build_lines(state.session.transcript().turns(), width);

        if state.session.transcript().is_empty() && !state.is_thinking() {
            lines.push(Line::from(Span::styled(
                "Ask me anything about nutrition!",
                Theme::muted(),
            )));
        }

        if state.is_thinking() {
            lines.push(Line::from(Span::styled("Thinking...", Theme::loading().italic())));
        }

        let max_scroll = (lines.len() as u16).saturating_sub(area.height);
        if state.follow || state.scroll > max_scroll {
            state.scroll = max_scroll;
        }
        if state.scroll >= max_scroll {
            state.follow = true;
        }

        let paragraph = Paragraph::new(lines).style(Theme::base()).scroll((state.scroll, 0));
        let inner = Rect { x: area.x + 1, y: area.y, width: area.width.saturating_sub(2), height: area.height };
        frame.render_widget(paragraph, inner);
    }
}

/// Split a bot turn into its display segments (the bullet rule)
pub fn bot_segments(text: &str) -> Vec<String> {
    if text.contains('\n') {
        text.lines()
            .filter(|segment| !segment.trim().is_empty())
            .map(|segment| format!("{}{}", BULLET, segment))
            .collect()
    } else {
        vec![text.to_string()]
    }
}

/// Build display lines for the whole transcript at the given width
pub fn build_lines(turns: &[Turn], width: usize) -> Vec<Line<'static>> {
    let width = width.max(8);
    let mut lines = Vec::new();

    for (idx, turn) in turns.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::from(Span::raw("")));
        }
        match turn.speaker {
            Speaker::User => {
                for wrapped in textwrap::wrap(&turn.text, width) {
                    let pad = width.saturating_sub(wrapped.width());
                    lines.push(Line::from(vec![
                        Span::raw(" ".repeat(pad)),
                        Span::styled(wrapped.into_owned(), Theme::user()),
                    ]));
                }
            }
            Speaker::Bot => {
                let style = if turn.text.starts_with("Error: ") { Theme::error() } else { Theme::bot() };
                for segment in bot_segments(&turn.text) {
                    let indent = if segment.starts_with(BULLET) { "  " } else { "" };
                    for wrapped in textwrap::wrap(&segment, width.saturating_sub(indent.len())) {
                        lines.push(Line::from(Span::styled(format!("{}{}", indent, wrapped), style)));
                    }
                }
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrichat_core::Transcript;

    #[test]
    fn test_bot_segments_single_line() {
        assert_eq!(bot_segments("Hello there"), vec!["Hello there"]);
    }

    #[test]
    fn test_bot_segments_multi_line_bulleted() {
        let segments = bot_segments("Here are some meal options:\nTofu stir fry\nLentil soup");
        assert_eq!(
            segments,
            vec!["• Here are some meal options:", "• Tofu stir fry", "• Lentil soup"]
        );
    }

    #[test]
    fn test_bot_segments_skip_blank_segments() {
        let segments = bot_segments("first\n\n  \nsecond");
        assert_eq!(segments, vec!["• first", "• second"]);
    }

    #[test]
    fn test_build_lines_user_right_aligned() {
        let mut transcript = Transcript::new();
        transcript.push_user("hi");

        let lines = build_lines(transcript.turns(), 20);
        assert_eq!(lines.len(), 1);
        // Two spans: padding then the text, pushed to the right edge.
        assert_eq!(lines[0].spans[0].content.len(), 18);
        assert_eq!(lines[0].spans[1].content, "hi");
    }

    #[test]
    fn test_build_lines_blank_line_between_turns() {
        let mut transcript = Transcript::new();
        transcript.push_user("question");
        transcript.push_bot("answer");

        let lines = build_lines(transcript.turns(), 40);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].spans[0].content, "");
    }

    #[test]
    fn test_build_lines_wraps_long_bot_turn() {
        let mut transcript = Transcript::new();
        transcript.push_bot("a answer that is much too long to fit on one narrow line of output");

        let lines = build_lines(transcript.turns(), 20);
        assert!(lines.len() > 1);
    }

    #[test]
    fn test_stored_text_unchanged_by_presentation() {
        let mut transcript = Transcript::new();
        let original = "line one\nline two";
        transcript.push_bot(original);

        let _ = build_lines(transcript.turns(), 40);
        assert_eq!(transcript.turns()[0].text, original);
    }
}
