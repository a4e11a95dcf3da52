pub mod acquire;
pub mod action;
pub mod board;
pub mod config;
pub mod error;
pub mod event;
pub mod service;
pub mod state;

// Re-export commonly used types at crate root
pub use acquire::acquire_game;
pub use action::Action;
pub use board::{Board, CellPosition, Clue, Column, Reveal};
pub use config::Config;
pub use error::AcquisitionError;
pub use event::AppEvent;
pub use service::{HttpTriviaProvider, TriviaProvider};
pub use state::{AppState, Mode};
