/// Every user interaction produces an Action. The UI never calls the
/// trivia service directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Game
    NewGame,
    RevealCell,

    // Movement
    MoveSelection { rows: i32, cols: i32 },

    // UI
    ShowHelp,
    GoBack,
    Quit,
}
