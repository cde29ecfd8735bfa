//! Diagnostic endpoint that shows what the upstream search returns for a title.

use actix_web::{get, web, HttpResponse};
use log::info;

use crate::{
    models::{TestErrorResponse, TestQuery, TestResponse},
    services::{format_books, SearchAdapter},
};

/// How many results are echoed to the log.
const SAMPLE_SIZE: usize = 3;

/// Run a similar-books search and return every formatted result.
///
/// An empty search is reported in the body with HTTP 200, never as an error
/// status.
#[get("/test")]
pub async fn test_recommendation(
    query: web::Query<TestQuery>,
    search: web::Data<SearchAdapter>,
) -> HttpResponse {
    let title = query.into_inner().book;
    info!("Testing with: '{}'", title);

    let results = search.similar_books_or_empty(&title).await;
    if results.is_empty() {
        return HttpResponse::Ok().json(TestErrorResponse {
            error: "No books found".to_string(),
            tested_with: title,
        });
    }

    let books = format_books(results);

    info!("Sample results:");
    for (i, book) in books.iter().take(SAMPLE_SIZE).enumerate() {
        info!("  {}. {} by {}", i + 1, book.title, book.lead_author());
    }

    HttpResponse::Ok().json(TestResponse {
        tested_with: title,
        total_found: books.len(),
        results: books,
    })
}
