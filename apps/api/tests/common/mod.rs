#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use book_recommender_api::{
    models::{RawBookRecord, VolumeInfo},
    services::BookSource,
    SearchError,
};

/// Answers every search with the same records and remembers what was asked.
pub struct CannedSource {
    items: Option<Vec<RawBookRecord>>,
    queries: Mutex<Vec<String>>,
}

impl CannedSource {
    pub fn with_titles(titles: &[&str]) -> Self {
        Self {
            items: Some(titles.iter().map(|title| record(title)).collect()),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// A source whose upstream is down.
    pub fn unavailable() -> Self {
        Self {
            items: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookSource for CannedSource {
    async fn search_volumes(
        &self,
        query: &str,
        _max_results: u32,
    ) -> Result<Vec<RawBookRecord>, SearchError> {
        self.queries.lock().unwrap().push(query.to_string());
        self.items
            .clone()
            .ok_or_else(|| SearchError::Transport("connection refused".to_string()))
    }
}

pub fn record(title: &str) -> RawBookRecord {
    RawBookRecord {
        volume_info: Some(VolumeInfo {
            title: Some(title.to_string()),
            ..Default::default()
        }),
    }
}
