use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Calculated layout for the TUI
///
/// Vertical split: one-line header, optional quick-reply row (only before
/// the first turn), flexible transcript, three-line footer with the input
/// card and hints.
#[derive(Debug, Clone)]
pub struct TuiLayout {
    /// Header area (1 line)
    pub header: Rect,
    /// Quick-reply row (only while options are visible)
    pub quick_replies: Option<Rect>,
    /// Main transcript area
    pub transcript: Rect,
    /// Footer area (3 lines)
    pub footer: Rect,
}

impl TuiLayout {
    /// Calculate layout based on terminal size and quick-reply visibility
    pub fn calculate(area: Rect, options_visible: bool) -> Self {
        if options_visible {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Length(3),
                    Constraint::Min(0),
                    Constraint::Length(3),
                ])
                .split(area);

            Self { header: chunks[0], quick_replies: Some(chunks[1]), transcript: chunks[2], footer: chunks[3] }
        } else {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(3)])
                .split(area);

            Self { header: chunks[0], quick_replies: None, transcript: chunks[1], footer: chunks[2] }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_options() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = TuiLayout::calculate(area, true);

        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.quick_replies.unwrap().height, 3);
        assert_eq!(layout.footer.height, 3);
        assert_eq!(layout.transcript.height, 24 - 1 - 3 - 3);
    }

    #[test]
    fn test_layout_without_options() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = TuiLayout::calculate(area, false);

        assert!(layout.quick_replies.is_none());
        assert_eq!(layout.transcript.height, 24 - 1 - 3);
    }

    #[test]
    fn test_layout_tiny_terminal() {
        let area = Rect::new(0, 0, 20, 5);
        let layout = TuiLayout::calculate(area, true);

        // Fixed rows win; the transcript collapses before the chrome does.
        assert_eq!(layout.header.height, 1);
        assert!(layout.transcript.height <= 5);
    }
}
