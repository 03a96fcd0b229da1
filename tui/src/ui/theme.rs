use ratatui::style::{Color, Modifier, Style};

/// Green-on-black terminal palette shared by every screen.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Rgb(0, 0, 0);
    pub const FG: Color = Color::Rgb(57, 255, 20);
    pub const FG_DIM: Color = Color::Rgb(0, 190, 0);
    pub const FG_MUTED: Color = Color::Rgb(80, 90, 80);

    pub const ACCENT_CYAN: Color = Color::Rgb(0, 255, 255);
    pub const ACCENT_RED: Color = Color::Rgb(255, 70, 70);

    /// Full-screen background.
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    /// Placeholders and inactive tabs.
    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// The focused form row.
    pub fn focus() -> Style {
        Style::default()
            .bg(Color::Rgb(0, 30, 0))
            .add_modifier(Modifier::BOLD)
    }

    pub fn ok() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent_cyan() -> Style {
        Style::default()
            .fg(Self::ACCENT_CYAN)
            .add_modifier(Modifier::BOLD)
    }
}
