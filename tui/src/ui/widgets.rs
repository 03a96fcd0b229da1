use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Theme;

/// Renders `[key] action` rows, one per hint, as a column centered in `area`.
///
/// The column is as wide as its longest row; rows past the height of `area`
/// are dropped.
pub fn render_hints(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let key_width = hints.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0) + 3;
    let action_width = hints.iter().map(|(_, a)| a.chars().count()).max().unwrap_or(0);

    let width = ((key_width + action_width) as u16).min(area.width);
    let column = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    for (row, (key, action)) in (column.y..column.bottom()).zip(hints) {
        let line = Line::from(vec![
            Span::styled(
                format!("{:<key_width$}", format!("[{key}]")),
                Theme::accent_cyan(),
            ),
            Span::styled(*action, Theme::dim()),
        ]);
        f.render_widget(Paragraph::new(line), Rect { y: row, height: 1, ..column });
    }
}

/// Renders a one-line error message along the bottom edge of `area`.
pub fn error_bar(f: &mut Frame, area: Rect, msg: &str) {
    if area.height == 0 {
        return;
    }

    let bar = Rect {
        x: area.x + 1,
        y: area.y + area.height - 1,
        width: area.width.saturating_sub(2),
        height: 1,
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" ✖ ", Theme::error()),
            Span::styled(msg, Theme::error()),
        ])),
        bar,
    );
}

/// Returns a rectangle covering the given percentages of `r`, centered.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1])[1]
}
