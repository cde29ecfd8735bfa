use crate::models::{FormattedBook, RawBookRecord};

/// Descriptions longer than this many characters are cut and get "..." appended.
pub const DESCRIPTION_LIMIT: usize = 100;

const UNKNOWN: &str = "Unknown";
const NO_DESCRIPTION: &str = "No description";

/// Reduce an upstream record to its display shape. Missing fields fall back
/// to placeholders; this never fails.
pub fn format_book(record: RawBookRecord) -> FormattedBook {
    let info = record.volume_info.unwrap_or_default();

    FormattedBook {
        title: info.title.unwrap_or_else(|| UNKNOWN.to_string()),
        authors: info.authors.unwrap_or_else(|| vec![UNKNOWN.to_string()]),
        categories: info.categories.unwrap_or_else(|| vec![UNKNOWN.to_string()]),
        description: shorten_description(info.description),
    }
}

pub fn format_books(records: Vec<RawBookRecord>) -> Vec<FormattedBook> {
    records.into_iter().map(format_book).collect()
}

/// Cut at a fixed character count, even mid-word.
fn shorten_description(description: Option<String>) -> String {
    match description {
        Some(text) if !text.is_empty() => match text.char_indices().nth(DESCRIPTION_LIMIT) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None => text,
        },
        _ => NO_DESCRIPTION.to_string(),
    }
}
