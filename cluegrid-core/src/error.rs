use thiserror::Error;

/// Failure while assembling a game dataset from the trivia service.
/// Never retried automatically; the UI surfaces the message and returns to
/// a state from which the user can retry.
#[derive(Error, Debug)]
pub enum AcquisitionError {
    #[error("trivia service request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("trivia service error: {0}")]
    Service(String),

    #[error("only {got} categories with at least 5 clues available, need {wanted}")]
    NotEnoughCategories { wanted: usize, got: usize },

    #[error("category \"{category}\" returned {got} usable clues, need 5")]
    NotEnoughClues { category: String, got: usize },
}
