mod spawn;

use crate::{components, keymap, theme::Theme};
use cluegrid_core::{
    action::Action,
    event::AppEvent,
    service::TriviaProvider,
    state::{AppState, Mode},
};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use spawn::spawn_acquisition;
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc,
    },
    time::{Duration, Instant},
};

/// Handle for dispatching background work
#[derive(Clone)]
pub struct EventSender {
    tx: mpsc::Sender<AppEvent>,
    cancel: Arc<AtomicBool>,
}

impl EventSender {
    /// Send an event from a background thread to the main loop
    pub fn send(&self, event: AppEvent) {
        let _ = self.tx.send(event);
    }
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const LOADING_MESSAGE: &str = "Fetching categories and clues...";

pub fn run(
    terminal: &mut DefaultTerminal,
    state: &mut AppState,
    provider: &Arc<dyn TriviaProvider>,
    theme: &Theme,
) -> anyhow::Result<()> {
    let (tx, rx) = mpsc::channel::<AppEvent>();
    let cancel = Arc::new(AtomicBool::new(false));
    let event_sender = EventSender {
        tx,
        cancel: Arc::clone(&cancel),
    };
    let spinner_start = Instant::now();

    loop {
        terminal.draw(|f| draw(f, state, theme, &spinner_start))?;

        // Check background channel (non-blocking)
        if let Ok(app_event) = rx.try_recv() {
            process_app_event(app_event, state);
            continue;
        }

        // Poll terminal events with a timeout so we can update spinner + check channel
        if event::poll(Duration::from_millis(80))?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // While acquisition is in flight, only allow Ctrl+C; in
            // particular a second new-game trigger is not accepted
            if state.mode == Mode::Loading {
                if key.code == crossterm::event::KeyCode::Char('c')
                    && key
                        .modifiers
                        .contains(crossterm::event::KeyModifiers::CONTROL)
                {
                    // Signal cancellation to background threads
                    cancel.store(true, Ordering::Relaxed);
                    return Ok(());
                }
                continue;
            }

            // Clear error on any keypress
            state.error = None;

            if let Some(action) = keymap::resolve_action(key, state)
                && process_action(action, state, provider, &event_sender)
            {
                cancel.store(true, Ordering::Relaxed);
                return Ok(());
            }
        }
    }
}

fn draw(f: &mut Frame, state: &AppState, theme: &Theme, spinner_start: &Instant) {
    // Loading mode: full-screen spinner
    if state.mode == Mode::Loading {
        draw_loading(f, f.area(), LOADING_MESSAGE, theme, spinner_start);
        return;
    }

    let (main_area, hint_area, error_area) = if state.error.is_some() {
        let chunks = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());
        (chunks[0], chunks[1], Some(chunks[2]))
    } else {
        let chunks =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(f.area());
        (chunks[0], chunks[1], None)
    };

    match &state.mode {
        Mode::Welcome => components::welcome::draw(f, main_area, theme),
        Mode::Board => components::board::draw(f, main_area, state, theme),
        Mode::Help { previous } => {
            // Draw the previous mode as background
            match previous.as_ref() {
                Mode::Board => components::board::draw(f, main_area, state, theme),
                _ => components::welcome::draw(f, main_area, theme),
            }
            // Draw help overlay on top
            components::help::draw(f, theme);
        }
        Mode::Loading => unreachable!(),
    }

    components::hint_bar::draw(f, hint_area, state, theme);
    if let Some(area) = error_area {
        components::error_bar::draw(f, area, state);
    }
}

fn draw_loading(f: &mut Frame, area: Rect, message: &str, theme: &Theme, start: &Instant) {
    let elapsed = start.elapsed().as_millis() as usize;
    let frame_idx = (elapsed / 80) % SPINNER_FRAMES.len();
    let spinner = SPINNER_FRAMES[frame_idx];

    let text = Line::from(vec![
        Span::styled(
            format!("{spinner} "),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(message),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));

    let centered = components::centered_rect(50, 10, area);

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(paragraph, centered);
}

/// Handle events from background tasks
fn process_app_event(event: AppEvent, state: &mut AppState) {
    match event {
        AppEvent::GameReady { board } => state.install_board(board),
        AppEvent::AcquisitionFailed { error } => state.acquisition_failed(error),
    }
}

/// Apply a resolved action. Returns `true` when the app should exit.
fn process_action(
    action: Action,
    state: &mut AppState,
    provider: &Arc<dyn TriviaProvider>,
    sender: &EventSender,
) -> bool {
    match action {
        Action::Quit => return true,
        Action::NewGame => {
            state.begin_loading();
            spawn_acquisition(provider, sender, state.category_count);
        }
        Action::RevealCell => {
            state.reveal_selected();
        }
        Action::MoveSelection { rows, cols } => state.move_cursor(rows, cols),
        Action::ShowHelp => state.show_help(),
        Action::GoBack => state.close_help(),
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use cluegrid_core::{
        board::{Board, CLUE_ROWS, Clue, Column, Reveal},
        service::{CategoryRecord, ClueRecord, MockTriviaProvider},
    };
    use std::collections::HashMap;

    fn sample_board() -> Board {
        Board::new(vec![Column {
            title: "science".to_string(),
            clues: vec![Clue::new("H2O".to_string(), "Water".to_string())],
        }])
    }

    fn event_channel() -> (EventSender, mpsc::Receiver<AppEvent>) {
        let (tx, rx) = mpsc::channel();
        (
            EventSender {
                tx,
                cancel: Arc::new(AtomicBool::new(false)),
            },
            rx,
        )
    }

    fn stocked_provider() -> Arc<dyn TriviaProvider> {
        let categories: Vec<CategoryRecord> = (0..10)
            .map(|id| CategoryRecord {
                id,
                title: format!("category {id}"),
                clues_count: CLUE_ROWS,
            })
            .collect();
        let clues: HashMap<u64, Vec<ClueRecord>> = (0..10)
            .map(|id| {
                let records = (0..CLUE_ROWS)
                    .map(|i| ClueRecord {
                        question: Some(format!("q{id}-{i}")),
                        answer: Some(format!("a{id}-{i}")),
                    })
                    .collect();
                (id, records)
            })
            .collect();
        Arc::new(MockTriviaProvider {
            categories,
            clues,
            ..MockTriviaProvider::default()
        })
    }

    #[test]
    fn test_game_ready_installs_board() {
        let mut state = AppState::new(1);
        state.begin_loading();

        process_app_event(
            AppEvent::GameReady {
                board: sample_board(),
            },
            &mut state,
        );

        assert_eq!(state.mode, Mode::Board);
        assert!(state.board_built);
    }

    #[test]
    fn test_acquisition_failure_clears_loading() {
        let mut state = AppState::new(6);
        state.begin_loading();

        process_app_event(
            AppEvent::AcquisitionFailed {
                error: "service unreachable".to_string(),
            },
            &mut state,
        );

        assert_ne!(state.mode, Mode::Loading);
        assert_eq!(state.error.as_deref(), Some("service unreachable"));
    }

    #[test]
    fn test_new_game_action_round_trip() {
        let provider = stocked_provider();
        let (sender, rx) = event_channel();
        let mut state = AppState::new(6);

        let quit = process_action(Action::NewGame, &mut state, &provider, &sender);
        assert!(!quit);
        assert_eq!(state.mode, Mode::Loading);

        let event = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        process_app_event(event, &mut state);

        assert_eq!(state.mode, Mode::Board);
        let board = state.board.as_ref().unwrap();
        assert_eq!(board.category_count(), 6);
        assert_eq!(board.row_count(), CLUE_ROWS);
    }

    #[test]
    fn test_failed_acquisition_round_trip() {
        // Empty provider: no categories qualify
        let provider: Arc<dyn TriviaProvider> = Arc::new(MockTriviaProvider::default());
        let (sender, rx) = event_channel();
        let mut state = AppState::new(6);

        process_action(Action::NewGame, &mut state, &provider, &sender);
        let event = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        process_app_event(event, &mut state);

        assert_eq!(state.mode, Mode::Welcome);
        assert!(state.error.is_some());
    }

    #[test]
    fn test_reveal_and_quit_actions() {
        let provider = stocked_provider();
        let (sender, _rx) = event_channel();
        let mut state = AppState::new(1);
        state.install_board(sample_board());

        process_action(Action::RevealCell, &mut state, &provider, &sender);
        assert_eq!(
            state
                .board
                .as_ref()
                .unwrap()
                .clue(cluegrid_core::CellPosition::default())
                .unwrap()
                .reveal,
            Reveal::Question
        );

        assert!(process_action(Action::Quit, &mut state, &provider, &sender));
    }
}
