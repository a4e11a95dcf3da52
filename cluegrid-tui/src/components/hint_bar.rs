use crate::theme::Theme;
use cluegrid_core::state::{AppState, Mode};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// One-line key reminder at the bottom of the screen.
pub fn draw(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let hints: &[(&str, &str)] = match state.mode {
        Mode::Welcome => &[("enter", "new game"), ("?", "help"), ("q", "quit")],
        Mode::Board => &[
            ("enter", "reveal"),
            ("arrows", "move"),
            ("n", "new game"),
            ("?", "help"),
            ("q", "quit"),
        ],
        _ => return,
    };

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            *key,
            Style::default().fg(theme.hint).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {label}")));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
