use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{
    error::SearchError,
    models::{RawBookRecord, VolumesResponse},
};

/// Anything that can answer a free-text volume search.
///
/// The production implementation is [`GoogleBooksClient`]; tests plug in
/// canned sources so handlers run without network access.
#[async_trait]
pub trait BookSource: Send + Sync {
    async fn search_volumes(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<RawBookRecord>, SearchError>;
}

#[derive(Debug, Clone)]
pub struct GoogleBooksClient {
    client: Client,
    base_url: String,
}

impl GoogleBooksClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl BookSource for GoogleBooksClient {
    async fn search_volumes(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<RawBookRecord>, SearchError> {
        let max_results = max_results.to_string();
        debug!("GET {} q={:?} maxResults={}", self.base_url, query, max_results);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", query), ("maxResults", max_results.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let volumes: VolumesResponse = response.json().await?;
        Ok(volumes.items)
    }
}
