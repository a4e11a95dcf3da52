use crate::error::AcquisitionError;
use serde::Deserialize;

/// A category as returned by the categories query.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRecord {
    pub id: u64,
    pub title: String,
    pub clues_count: usize,
}

/// A clue as returned by the clues query. Live service data contains
/// records with missing or empty question/answer fields, so both are
/// optional at the wire level.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClueRecord {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

impl ClueRecord {
    /// Split into `(question, answer)` if both are present and non-blank.
    pub fn into_parts(self) -> Option<(String, String)> {
        let question = self.question.filter(|q| !q.trim().is_empty())?;
        let answer = self.answer.filter(|a| !a.trim().is_empty())?;
        Some((question, answer))
    }
}

pub trait TriviaProvider: Send + Sync {
    /// Fetch up to `count` candidate categories starting at `offset`.
    fn fetch_categories(
        &self,
        count: usize,
        offset: usize,
    ) -> Result<Vec<CategoryRecord>, AcquisitionError>;

    /// Fetch all clues belonging to one category.
    fn fetch_clues(&self, category_id: u64) -> Result<Vec<ClueRecord>, AcquisitionError>;
}
