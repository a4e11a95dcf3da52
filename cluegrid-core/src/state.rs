use crate::board::{Board, CellPosition, Reveal};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// No game yet: shows the start control
    Welcome,
    /// Acquisition in flight: busy indicator, new-game input disabled
    Loading,
    /// A board is installed and interactive
    Board,
    /// Help overlay on top of a previous mode
    Help { previous: Box<Mode> },
}

/// Owns the current game dataset and the session flags around it.
/// The single coordinator between acquisition results and the rendered grid.
#[derive(Debug)]
pub struct AppState {
    pub mode: Mode,
    pub board: Option<Board>,
    pub cursor: CellPosition,
    /// False until the first board is installed, never reset afterwards
    pub board_built: bool,
    pub error: Option<String>,
    /// Number of category columns to request per game
    pub category_count: usize,
}

impl AppState {
    pub fn new(category_count: usize) -> Self {
        Self {
            mode: Mode::Welcome,
            board: None,
            cursor: CellPosition::default(),
            board_built: false,
            error: None,
            category_count,
        }
    }

    /// Enter the busy state ahead of a background acquisition.
    pub fn begin_loading(&mut self) {
        self.error = None;
        self.mode = Mode::Loading;
    }

    /// Install a freshly acquired board. The first install builds the grid
    /// and homes the cursor; later installs reuse the grid structure and
    /// keep the cursor where it was, clamped into the new board.
    pub fn install_board(&mut self, board: Board) {
        if self.board_built {
            self.cursor.row = self.cursor.row.min(board.row_count().saturating_sub(1));
            self.cursor.col = self
                .cursor
                .col
                .min(board.category_count().saturating_sub(1));
        } else {
            self.cursor = CellPosition::default();
            self.board_built = true;
        }
        self.board = Some(board);
        self.mode = Mode::Board;
    }

    /// Record a failed acquisition and drop back to an interactive mode so
    /// the user can retry; the UI must never stay stuck on loading.
    pub fn acquisition_failed(&mut self, message: String) {
        log::warn!("acquisition failed: {message}");
        self.error = Some(message);
        self.mode = if self.board_built {
            Mode::Board
        } else {
            Mode::Welcome
        };
    }

    /// Move the cursor by the given deltas, clamped to the grid.
    pub fn move_cursor(&mut self, rows: i32, cols: i32) {
        let Some(board) = &self.board else { return };
        let max_row = board.row_count().saturating_sub(1);
        let max_col = board.category_count().saturating_sub(1);
        self.cursor.row = step(self.cursor.row, rows, max_row);
        self.cursor.col = step(self.cursor.col, cols, max_col);
    }

    /// Advance the selected cell one reveal step. Returns the new state, or
    /// `None` if the cell is already fully revealed or no board exists.
    pub fn reveal_selected(&mut self) -> Option<Reveal> {
        let board = self.board.as_mut()?;
        let revealed = board.reveal_next(self.cursor);
        if let Some(state) = revealed {
            log::debug!(
                "cell ({}, {}) -> {state:?}",
                self.cursor.row,
                self.cursor.col
            );
        }
        revealed
    }

    pub fn show_help(&mut self) {
        if !matches!(self.mode, Mode::Help { .. }) {
            let previous = std::mem::replace(&mut self.mode, Mode::Welcome);
            self.mode = Mode::Help {
                previous: Box::new(previous),
            };
        }
    }

    /// Leave the help overlay, restoring the mode underneath it.
    pub fn close_help(&mut self) {
        if let Mode::Help { previous } = std::mem::replace(&mut self.mode, Mode::Welcome) {
            self.mode = *previous;
        }
    }
}

fn step(current: usize, delta: i32, max: usize) -> usize {
    if delta >= 0 {
        current.saturating_add(delta.unsigned_abs() as usize).min(max)
    } else {
        current.saturating_sub(delta.unsigned_abs() as usize)
    }
}
