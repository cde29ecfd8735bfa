pub mod formatter;
pub mod google_books;
pub mod recommendation;
pub mod search;

// Re-export public types
pub use formatter::{format_book, format_books};
pub use google_books::{BookSource, GoogleBooksClient};
pub use recommendation::select_recommendations;
pub use search::SearchAdapter;
