pub mod http;
pub mod mock;
pub mod provider;

pub use http::HttpTriviaProvider;
pub use mock::MockTriviaProvider;
pub use provider::{CategoryRecord, ClueRecord, TriviaProvider};
