use serde::{Deserialize, Serialize};

// Re-export types from book.rs
pub use book::{FormattedBook, RawBookRecord, VolumeInfo, VolumesResponse};

mod book;

/// Title used when a caller does not name a book.
pub const DEFAULT_BOOK: &str = "Harry Potter";

/// Query string accepted by `GET /test`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestQuery {
    #[serde(default = "default_book")]
    pub book: String,
}

/// Request body accepted by `POST /recommend`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    #[serde(default = "default_book")]
    pub book: String,
}

/// Successful `GET /test` payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResponse {
    pub tested_with: String,
    pub total_found: usize,
    pub results: Vec<FormattedBook>,
}

/// `GET /test` payload when the search came back empty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestErrorResponse {
    pub error: String,
    pub tested_with: String,
}

/// The three fixed slots returned by `POST /recommend`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub top_pick: FormattedBook,
    pub same_genre_different_style: FormattedBook,
    pub different_genre_same_vibes: FormattedBook,
}

/// Error response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Health check response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Current timestamp in RFC3339 format
    pub timestamp: String,
}

fn default_book() -> String {
    DEFAULT_BOOK.to_string()
}
