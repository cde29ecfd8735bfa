use std::sync::Arc;

use tracing::{error, info};

use crate::{error::SearchError, models::RawBookRecord, services::BookSource};

/// Candidates requested from upstream per search.
pub const UPSTREAM_CANDIDATES: u32 = 15;

/// Upper bound on books handed back to callers.
pub const MAX_SIMILAR_BOOKS: usize = 10;

/// Finds books similar to a title by asking the upstream source for
/// "books like ..." and dropping hits that are the title itself.
#[derive(Clone)]
pub struct SearchAdapter {
    source: Arc<dyn BookSource>,
}

impl SearchAdapter {
    pub fn new(source: Arc<dyn BookSource>) -> Self {
        Self { source }
    }

    /// Search for books similar to `title`.
    ///
    /// `Ok(vec![])` means upstream answered but nothing survived the filter;
    /// `Err` means the upstream call itself failed.
    pub async fn search_similar(&self, title: &str) -> Result<Vec<RawBookRecord>, SearchError> {
        info!("Searching for books like: {}", title);

        let query = similar_books_query(title);
        let candidates = self
            .source
            .search_volumes(&query, UPSTREAM_CANDIDATES)
            .await?;

        let similar = filter_similar(title, candidates);
        info!("Found {} similar books", similar.len());
        Ok(similar)
    }

    /// The one place upstream failures are collapsed into "no results".
    pub async fn similar_books_or_empty(&self, title: &str) -> Vec<RawBookRecord> {
        match self.search_similar(title).await {
            Ok(books) => books,
            Err(e) => {
                error!("Book search for '{}' failed: {}", title, e);
                Vec::new()
            }
        }
    }
}

pub fn similar_books_query(title: &str) -> String {
    format!("books like {}", title)
}

/// Drop candidates whose title contains `title` (case-insensitive) and keep
/// the first [`MAX_SIMILAR_BOOKS`] of the rest in upstream order.
pub fn filter_similar(title: &str, candidates: Vec<RawBookRecord>) -> Vec<RawBookRecord> {
    let needle = title.to_lowercase();

    candidates
        .into_iter()
        .filter(|candidate| !candidate.title().to_lowercase().contains(&needle))
        .take(MAX_SIMILAR_BOOKS)
        .collect()
}
