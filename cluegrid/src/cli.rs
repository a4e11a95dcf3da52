use cluegrid_core::{Board, acquire_game, config::Config, service::TriviaProvider};
use serde::Serialize;
use std::fmt::Write as _;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    message: String,
    code: i32,
}

impl CliError {
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 1,
        }
    }

    pub fn system(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 2,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> i32 {
        self.code
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(value: anyhow::Error) -> Self {
        Self::system(value.to_string())
    }
}

/// Acquire a game dataset and print it, without starting the UI. Useful
/// for scripting and for checking connectivity to the trivia service.
pub fn cmd_fetch(
    config: &Config,
    provider: &dyn TriviaProvider,
    categories: Option<usize>,
    json: bool,
) -> CliResult<()> {
    let count = categories.unwrap_or(config.board.categories);
    if count == 0 {
        return Err(CliError::user("--categories must be at least 1"));
    }
    let board = acquire_game(provider, count).map_err(|e| CliError::system(e.to_string()))?;

    if json {
        print_json(&board)?;
    } else {
        print!("{}", format_board(&board));
    }

    Ok(())
}

fn format_board(board: &Board) -> String {
    let mut out = String::new();
    for (i, column) in board.columns.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out);
        }
        let _ = writeln!(out, "{}", column.title);
        for clue in &column.clues {
            let _ = writeln!(out, "  Q: {}", clue.question);
            let _ = writeln!(out, "     A: {}", clue.answer);
        }
    }
    out
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!(
        "{}",
        serde_json::to_string(value).map_err(|e| CliError::system(e.to_string()))?
    );
    Ok(())
}

pub fn print_error(error: &CliError, json: bool) {
    if json {
        let payload = serde_json::json!({ "error": error.message() });
        eprintln!("{payload}");
    } else {
        eprintln!("{}", error.message());
    }
}
