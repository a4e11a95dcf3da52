use crate::{components, theme::Theme};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Start screen shown before the first game.
pub fn draw(f: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(Span::styled(
            "cluegrid",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::raw("press "),
            Span::styled(
                "enter",
                Style::default().fg(theme.hint).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" to start a new game"),
        ]),
        Line::from(vec![
            Span::raw("press "),
            Span::styled(
                "?",
                Style::default().fg(theme.hint).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" for help"),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    let centered = components::centered_rect(50, 30, area);
    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(paragraph, centered);
}
