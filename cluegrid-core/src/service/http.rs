use super::provider::{CategoryRecord, ClueRecord, TriviaProvider};
use crate::error::AcquisitionError;
use reqwest::blocking::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://jservice.io/api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Talks to a jservice-style trivia API over HTTP. Blocking: calls run on
/// the background acquisition thread, never on the UI thread.
pub struct HttpTriviaProvider {
    client: Client,
    base_url: String,
}

impl HttpTriviaProvider {
    pub fn new(base_url: &str) -> Result<Self, AcquisitionError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl TriviaProvider for HttpTriviaProvider {
    fn fetch_categories(
        &self,
        count: usize,
        offset: usize,
    ) -> Result<Vec<CategoryRecord>, AcquisitionError> {
        let url = format!("{}/categories", self.base_url);
        log::debug!("GET {url}?count={count}&offset={offset}");
        let response = self
            .client
            .get(&url)
            .query(&[("count", count), ("offset", offset)])
            .send()?;
        if !response.status().is_success() {
            return Err(AcquisitionError::Service(format!(
                "categories query returned {}",
                response.status()
            )));
        }
        Ok(response.json()?)
    }

    fn fetch_clues(&self, category_id: u64) -> Result<Vec<ClueRecord>, AcquisitionError> {
        let url = format!("{}/clues", self.base_url);
        log::debug!("GET {url}?category={category_id}");
        let response = self
            .client
            .get(&url)
            .query(&[("category", category_id)])
            .send()?;
        if !response.status().is_success() {
            return Err(AcquisitionError::Service(format!(
                "clues query returned {}",
                response.status()
            )));
        }
        Ok(response.json()?)
    }
}
