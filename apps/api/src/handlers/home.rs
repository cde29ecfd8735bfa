use actix_web::{get, http::header::ContentType, HttpResponse};

const HOME_PAGE: &str = r#"
    <h1>Book Recommender Test</h1>
    <p>Test endpoints:</p>
    <ul>
        <li><a href="/test?book=Harry+Potter">/test?book=Harry+Potter</a></li>
        <li><a href="/test?book=Dune">/test?book=Dune</a></li>
        <li><a href="/test?book=The+Hobbit">/test?book=The+Hobbit</a></li>
    </ul>
    <p>Use POST to /recommend with JSON: {"book": "Book Title"}</p>
    "#;

/// Landing page with sample links.
#[get("/")]
pub async fn home_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(HOME_PAGE)
}
