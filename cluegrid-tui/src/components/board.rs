use crate::theme::Theme;
use cluegrid_core::{
    board::{Board, CellPosition, Reveal},
    state::AppState,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Draw the trivia grid: one header cell per category on top, then the
/// clue cells. Every cell's text is derived from the board dataset, never
/// stored in the UI.
pub fn draw(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let Some(board) = &state.board else { return };
    if board.category_count() == 0 {
        return;
    }

    let mut row_constraints = vec![Constraint::Fill(1); board.row_count() + 1];
    row_constraints[0] = Constraint::Length(2);
    let rows = Layout::vertical(row_constraints).split(area);

    let column_constraints =
        vec![Constraint::Ratio(1, board.category_count() as u32); board.category_count()];

    let header_cells = Layout::horizontal(column_constraints.clone()).split(rows[0]);
    for (col, column) in board.columns.iter().enumerate() {
        let title = Paragraph::new(column.title.to_uppercase())
            .style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(title, header_cells[col]);
    }

    for row in 0..board.row_count() {
        let cells = Layout::horizontal(column_constraints.clone()).split(rows[row + 1]);
        for col in 0..board.category_count() {
            let pos = CellPosition::new(row, col);
            draw_cell(f, cells[col], board, pos, pos == state.cursor, theme);
        }
    }
}

fn draw_cell(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    pos: CellPosition,
    selected: bool,
    theme: &Theme,
) {
    let Some(clue) = board.clue(pos) else { return };
    let text = board.display_text(pos).unwrap_or_default();

    let border_style = if selected {
        Style::default()
            .fg(theme.secondary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut text_style = match clue.reveal {
        Reveal::Hidden => Style::default()
            .fg(theme.muted)
            .add_modifier(Modifier::BOLD),
        Reveal::Question | Reveal::Answer => Style::default(),
    };
    if selected {
        text_style = text_style
            .bg(theme.secondary)
            .fg(theme.highlight_fg)
            .remove_modifier(Modifier::BOLD);
    }

    let cell = Paragraph::new(text)
        .style(text_style)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(cell, area);
}
