use cluegrid_core::action::Action;
use cluegrid_core::state::{AppState, Mode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Resolve a key event into an Action based on current mode
pub fn resolve_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    // Global quit
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match state.mode {
        Mode::Welcome => resolve_welcome_key(key.code),
        Mode::Board => resolve_board_key(key.code),
        Mode::Help { .. } => resolve_help_key(key.code),
        Mode::Loading => None, // Handled directly in the run loop (only Ctrl+C)
    }
}

fn resolve_welcome_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Enter | KeyCode::Char('n') => Some(Action::NewGame),
        KeyCode::Char('?') => Some(Action::ShowHelp),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

fn resolve_board_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::RevealCell),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveSelection { rows: -1, cols: 0 }),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveSelection { rows: 1, cols: 0 }),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveSelection { rows: 0, cols: -1 }),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveSelection { rows: 0, cols: 1 }),
        KeyCode::Char('n') => Some(Action::NewGame),
        KeyCode::Char('?') => Some(Action::ShowHelp),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

fn resolve_help_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
            Some(Action::GoBack)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_welcome_enter_starts_game() {
        let state = AppState::new(6);
        assert_eq!(
            resolve_action(key(KeyCode::Enter), &state),
            Some(Action::NewGame)
        );
        assert_eq!(
            resolve_action(key(KeyCode::Char('q')), &state),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_loading_ignores_input() {
        let mut state = AppState::new(6);
        state.begin_loading();
        assert_eq!(resolve_action(key(KeyCode::Enter), &state), None);
        assert_eq!(resolve_action(key(KeyCode::Char('n')), &state), None);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut state = AppState::new(6);
        state.begin_loading();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(resolve_action(ctrl_c, &state), Some(Action::Quit));
    }

    #[test]
    fn test_board_keys() {
        let mut state = AppState::new(6);
        state.install_board(cluegrid_core::Board::default());
        assert_eq!(
            resolve_action(key(KeyCode::Enter), &state),
            Some(Action::RevealCell)
        );
        assert_eq!(
            resolve_action(key(KeyCode::Char('j')), &state),
            Some(Action::MoveSelection { rows: 1, cols: 0 })
        );
        assert_eq!(
            resolve_action(key(KeyCode::Char('n')), &state),
            Some(Action::NewGame)
        );
    }

    #[test]
    fn test_help_closes_on_escape() {
        let mut state = AppState::new(6);
        state.show_help();
        assert_eq!(
            resolve_action(key(KeyCode::Esc), &state),
            Some(Action::GoBack)
        );
    }
}
