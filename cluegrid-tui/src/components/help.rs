use crate::{components, theme::Theme};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const BINDINGS: &[(&str, &str)] = &[
    ("enter / space", "reveal clue, then answer"),
    ("arrows / hjkl", "move between cells"),
    ("n", "start a new game"),
    ("?", "toggle this help"),
    ("q / esc", "quit"),
    ("ctrl+c", "quit (also while loading)"),
];

/// Help overlay drawn on top of the current mode.
pub fn draw(f: &mut Frame, theme: &Theme) {
    let mut text = vec![
        Line::from(Span::styled(
            "Each cell cycles hidden -> question -> answer.",
            Style::default().fg(theme.muted),
        )),
        Line::raw(""),
    ];
    for (key, description) in BINDINGS {
        text.push(Line::from(vec![
            Span::styled(
                format!("{key:>14}"),
                Style::default().fg(theme.hint).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::raw(*description),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .border_style(Style::default().fg(theme.secondary));

    let centered = components::centered_rect(60, 50, f.area());
    f.render_widget(Clear, centered);
    f.render_widget(
        Paragraph::new(text).block(block).alignment(Alignment::Left),
        centered,
    );
}
