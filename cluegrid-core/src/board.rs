use serde::Serialize;

/// Clues per category column. The acquisition pipeline guarantees every
/// column carries exactly this many clues.
pub const CLUE_ROWS: usize = 5;

/// What a cell shows before it has been activated.
pub const HIDDEN_MARKER: &str = "?";

/// Prefix for the answer-phrased text shown after the second activation.
pub const ANSWER_PREFIX: &str = "What is ";

/// Reveal state of a single clue cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reveal {
    Hidden,
    Question,
    Answer,
}

#[derive(Debug, Clone, Serialize)]
pub struct Clue {
    pub question: String,
    pub answer: String,
    pub reveal: Reveal,
}

impl Clue {
    pub fn new(question: String, answer: String) -> Self {
        Self {
            question,
            answer,
            reveal: Reveal::Hidden,
        }
    }
}

/// One category column: the category title plus its `CLUE_ROWS` clues.
#[derive(Debug, Clone, Serialize)]
pub struct Column {
    pub title: String,
    pub clues: Vec<Clue>,
}

/// A cell on the board. `row` indexes into a column's clues, `col` indexes
/// into the column sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The full game dataset: category columns in acquisition order. This is the
/// single source of truth for reveal state; the UI derives every cell's
/// visible text from it each frame, so text and state cannot diverge.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Board {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn category_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.clues.len())
    }

    pub fn clue(&self, pos: CellPosition) -> Option<&Clue> {
        self.columns.get(pos.col)?.clues.get(pos.row)
    }

    fn clue_mut(&mut self, pos: CellPosition) -> Option<&mut Clue> {
        self.columns.get_mut(pos.col)?.clues.get_mut(pos.row)
    }

    /// Text the cell at `pos` should currently display, or `None` if the
    /// position is out of bounds.
    pub fn display_text(&self, pos: CellPosition) -> Option<String> {
        let clue = self.clue(pos)?;
        Some(match clue.reveal {
            Reveal::Hidden => HIDDEN_MARKER.to_string(),
            Reveal::Question => clue.question.clone(),
            Reveal::Answer => format!("{ANSWER_PREFIX}{}", clue.answer),
        })
    }

    /// Advance the cell at `pos` one step through its reveal cycle:
    /// hidden -> question -> answer. Returns the new state, or `None` if
    /// the cell is already fully revealed or `pos` is out of bounds.
    pub fn reveal_next(&mut self, pos: CellPosition) -> Option<Reveal> {
        let clue = self.clue_mut(pos)?;
        let next = match clue.reveal {
            Reveal::Hidden => Reveal::Question,
            Reveal::Question => Reveal::Answer,
            Reveal::Answer => return None,
        };
        clue.reveal = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn science_board() -> Board {
        Board::new(vec![Column {
            title: "SCIENCE".to_string(),
            clues: vec![
                Clue::new("H2O".to_string(), "Water".to_string()),
                Clue::new("NaCl".to_string(), "Salt".to_string()),
            ],
        }])
    }

    #[test]
    fn test_reveal_cycle() {
        let mut board = science_board();
        let pos = CellPosition::new(0, 0);

        assert_eq!(board.display_text(pos).as_deref(), Some("?"));

        assert_eq!(board.reveal_next(pos), Some(Reveal::Question));
        assert_eq!(board.display_text(pos).as_deref(), Some("H2O"));
        assert_eq!(board.clue(pos).unwrap().reveal, Reveal::Question);

        assert_eq!(board.reveal_next(pos), Some(Reveal::Answer));
        assert_eq!(board.display_text(pos).as_deref(), Some("What is Water"));
        assert_eq!(board.clue(pos).unwrap().reveal, Reveal::Answer);
    }

    #[test]
    fn test_revealed_cell_is_terminal() {
        let mut board = science_board();
        let pos = CellPosition::new(0, 0);
        board.reveal_next(pos);
        board.reveal_next(pos);

        let before = board.display_text(pos);
        assert_eq!(board.reveal_next(pos), None);
        assert_eq!(board.display_text(pos), before);
        assert_eq!(board.clue(pos).unwrap().reveal, Reveal::Answer);
    }

    #[test]
    fn test_cannot_skip_to_answer() {
        let mut board = science_board();
        let pos = CellPosition::new(0, 0);

        // A single activation never produces the answer-phrased text
        assert_eq!(board.reveal_next(pos), Some(Reveal::Question));
        let shown = board.display_text(pos).unwrap();
        assert!(!shown.starts_with(ANSWER_PREFIX));
    }

    #[test]
    fn test_out_of_bounds_position_ignored() {
        let mut board = science_board();
        assert_eq!(board.reveal_next(CellPosition::new(7, 0)), None);
        assert_eq!(board.reveal_next(CellPosition::new(0, 3)), None);
        assert!(board.display_text(CellPosition::new(9, 9)).is_none());
        assert_eq!(board.clue(CellPosition::new(0, 0)).unwrap().reveal, Reveal::Hidden);
    }

    #[test]
    fn test_cells_reveal_independently() {
        let mut board = science_board();
        board.reveal_next(CellPosition::new(0, 0));

        assert_eq!(board.clue(CellPosition::new(0, 0)).unwrap().reveal, Reveal::Question);
        assert_eq!(board.clue(CellPosition::new(1, 0)).unwrap().reveal, Reveal::Hidden);
    }

    #[test]
    fn test_dimensions() {
        let board = science_board();
        assert_eq!(board.category_count(), 1);
        assert_eq!(board.row_count(), 2);
        assert_eq!(Board::default().row_count(), 0);
    }
}
