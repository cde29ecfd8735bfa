use actix_web::{
    web::{self, Json},
    HttpResponse,
};
use tracing::debug;

use crate::{
    error::json_error_handler,
    models::{ErrorResponse, RecommendRequest},
    services::{format_books, select_recommendations, SearchAdapter},
};

pub const NO_BOOKS_FOUND: &str = "No books found. Try another title.";
pub const NOT_ENOUGH_BOOKS: &str = "Not enough books found";

pub fn recommend_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/recommend")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route(web::post().to(recommend)),
    );
}

/// Pick three books related to the requested title.
///
/// Every outcome is HTTP 200; callers check the body for an `error` key.
pub async fn recommend(
    request: Json<RecommendRequest>,
    search: web::Data<SearchAdapter>,
) -> HttpResponse {
    let title = request.book.trim();

    let results = search.similar_books_or_empty(title).await;
    if results.is_empty() {
        return HttpResponse::Ok().json(ErrorResponse::new(NO_BOOKS_FOUND));
    }

    let books = format_books(results);

    match select_recommendations(&books) {
        Some(recommendations) => HttpResponse::Ok().json(recommendations),
        None => {
            debug!("Only {} books found for '{}'", books.len(), title);
            HttpResponse::Ok().json(ErrorResponse::new(NOT_ENOUGH_BOOKS))
        }
    }
}
