use ratatui::style::{Color, Style};

/// Color theme for the NutriChat TUI
///
/// Dark background with a green primary accent (bot) and a blue secondary
/// accent (user), echoing the original widget's palette.
#[derive(Debug, Clone, Copy)]
pub struct Theme;

impl Theme {
    /// Primary background
    pub const BG: Color = Color::Rgb(24, 26, 32);

    /// Foreground: primary text
    pub const FG: Color = Color::Rgb(206, 208, 214);

    /// Secondary background (cards, input)
    pub const PANEL_BG: Color = Color::Rgb(34, 37, 46);

    /// Primary accent: green (bot turns, quick replies)
    pub const GREEN: Color = Color::Rgb(140, 190, 120);

    /// Secondary accent: blue (user turns, input accent)
    pub const BLUE: Color = Color::Rgb(122, 162, 208);

    /// Loading indicator: yellow
    pub const YELLOW: Color = Color::Rgb(222, 180, 120);

    /// Errors: red
    pub const RED: Color = Color::Rgb(224, 122, 122);

    /// Muted text: dimmed foreground
    pub const MUTED: Color = Color::Rgb(110, 115, 135);

    /// Base style for all text
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    /// Style for user turns
    pub fn user() -> Style {
        Style::default().fg(Self::BLUE).bg(Self::BG)
    }

    /// Style for bot turns
    pub fn bot() -> Style {
        Style::default().fg(Self::GREEN).bg(Self::BG)
    }

    /// Style for the loading indicator
    pub fn loading() -> Style {
        Style::default().fg(Self::YELLOW).bg(Self::BG)
    }

    /// Error style
    pub fn error() -> Style {
        Style::default().fg(Self::RED).bg(Self::BG)
    }

    /// Muted style (hints, placeholders)
    pub fn muted() -> Style {
        Style::default().fg(Self::MUTED).bg(Self::BG)
    }
}
