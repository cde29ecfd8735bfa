use crate::models::{FormattedBook, RecommendationSet};

/// Fewest books needed to fill every recommendation slot.
pub const MIN_BOOKS_FOR_RECOMMENDATION: usize = 3;

/// Fill the recommendation slots by fixed position in the search results.
///
/// Slot names suggest genre awareness but the picks are purely positional:
/// index 0, index 2, and index 4 when more than four books exist (else 1).
/// Returns `None` with fewer than three books.
pub fn select_recommendations(books: &[FormattedBook]) -> Option<RecommendationSet> {
    if books.len() < MIN_BOOKS_FOR_RECOMMENDATION {
        return None;
    }

    let vibes_index = if books.len() > 4 { 4 } else { 1 };

    Some(RecommendationSet {
        top_pick: books[0].clone(),
        same_genre_different_style: books[2].clone(),
        different_genre_same_vibes: books[vibes_index].clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn books(count: usize) -> Vec<FormattedBook> {
        (0..count)
            .map(|i| FormattedBook {
                title: format!("Book {}", i),
                authors: vec!["Unknown".to_string()],
                categories: vec!["Unknown".to_string()],
                description: "No description".to_string(),
            })
            .collect()
    }

    #[test]
    fn fewer_than_three_books_yield_nothing() {
        assert!(select_recommendations(&books(0)).is_none());
        assert!(select_recommendations(&books(1)).is_none());
        assert!(select_recommendations(&books(2)).is_none());
    }

    #[test]
    fn three_and_four_books_fall_back_to_index_one() {
        for count in [3, 4] {
            let list = books(count);
            let set = select_recommendations(&list).unwrap();
            assert_eq!(set.top_pick, list[0]);
            assert_eq!(set.same_genre_different_style, list[2]);
            assert_eq!(set.different_genre_same_vibes, list[1]);
        }
    }

    #[test]
    fn five_or_more_books_use_index_four() {
        let list = books(10);
        let set = select_recommendations(&list).unwrap();
        assert_eq!(set.top_pick, list[0]);
        assert_eq!(set.same_genre_different_style, list[2]);
        assert_eq!(set.different_genre_same_vibes, list[4]);
    }

    // Known limitation: categories play no part in the picks.
    #[test]
    fn selection_ignores_categories() {
        let mut list = books(5);
        list[1].categories = vec!["Fantasy".to_string()];
        list[2].categories = vec!["Cooking".to_string()];
        let set = select_recommendations(&list).unwrap();
        assert_eq!(set.same_genre_different_style.categories, vec!["Cooking"]);
    }
}
