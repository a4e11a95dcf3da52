use super::provider::{CategoryRecord, ClueRecord, TriviaProvider};
use crate::error::AcquisitionError;
use std::{collections::HashMap, sync::Mutex};

#[derive(Default)]
pub struct MockTriviaProvider {
    pub categories: Vec<CategoryRecord>,
    pub clues: HashMap<u64, Vec<ClueRecord>>,
    pub categories_error: Mutex<Option<String>>,
    pub clues_error: Mutex<Option<String>>,
    pub fetch_categories_calls: Mutex<Vec<(usize, usize)>>,
    pub fetch_clues_calls: Mutex<Vec<u64>>,
}

impl TriviaProvider for MockTriviaProvider {
    fn fetch_categories(
        &self,
        count: usize,
        offset: usize,
    ) -> Result<Vec<CategoryRecord>, AcquisitionError> {
        self.fetch_categories_calls
            .lock()
            .unwrap()
            .push((count, offset));
        if let Some(error) = self.categories_error.lock().unwrap().take() {
            return Err(AcquisitionError::Service(error));
        }
        Ok(self.categories.iter().take(count).cloned().collect())
    }

    fn fetch_clues(&self, category_id: u64) -> Result<Vec<ClueRecord>, AcquisitionError> {
        self.fetch_clues_calls.lock().unwrap().push(category_id);
        if let Some(error) = self.clues_error.lock().unwrap().take() {
            return Err(AcquisitionError::Service(error));
        }
        Ok(self.clues.get(&category_id).cloned().unwrap_or_default())
    }
}
