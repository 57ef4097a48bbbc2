//! Filtering and sorting over book slices.
//!
//! Pure helpers used by the state manager. Filtering always returns a fresh
//! vector in input order; sorting is stable and works in place.

use super::modes::{ScopeButton, SortSegment};
use crate::domain::Book;
use crate::infrastructure::{DateFormatter, DatePattern};

/// Returns the books matching `query` within `scope`, preserving input order.
///
/// # Matching Rules
///
/// - **Empty query**: every book matches
/// - **Title**: the lower-cased title contains the lower-cased query
/// - **Dates**: the date rendered as "Month Year" and lower-cased contains every
///   whitespace-separated token of the lower-cased query
///
/// # Example
///
/// ```rust
/// use shelfview::app::{query, ScopeButton};
/// use shelfview::infrastructure::ChronoDateFormatter;
/// use shelfview::Book;
///
/// let books = vec![Book::new("Harry Potter", "2019-04-15", "")];
/// let hits = query::filter_books(&books, "2019 april", ScopeButton::DateStarted, &ChronoDateFormatter);
/// assert_eq!(hits.len(), 1);
/// ```
#[must_use]
pub fn filter_books(
    books: &[Book],
    query: &str,
    scope: ScopeButton,
    formatter: &dyn DateFormatter,
) -> Vec<Book> {
    if query.is_empty() {
        return books.to_vec();
    }

    match scope {
        ScopeButton::Title => {
            let needle = query.to_lowercase();
            books
                .iter()
                .filter(|book| book.title.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        }
        ScopeButton::DateStarted => books
            .iter()
            .filter(|book| {
                date_matches(&formatter.format(&book.date_started, DatePattern::MonthYear), query)
            })
            .cloned()
            .collect(),
        ScopeButton::DateFinished => books
            .iter()
            .filter(|book| {
                date_matches(&formatter.format(&book.date_finished, DatePattern::MonthYear), query)
            })
            .cloned()
            .collect(),
    }
}

/// Whether every query token appears in `formatted`, case-insensitively.
///
/// A query with no tokens matches anything.
#[must_use]
pub fn date_matches(formatted: &str, query: &str) -> bool {
    let haystack = formatted.to_lowercase();
    query
        .to_lowercase()
        .split_whitespace()
        .all(|token| haystack.contains(token))
}

/// Sorts `books` in place by `segment`.
///
/// Titles ascend; dates descend by raw string comparison. Ties keep their
/// current relative order.
pub fn sort_books(books: &mut [Book], segment: SortSegment) {
    match segment {
        SortSegment::Title => books.sort_by(|a, b| a.title.cmp(&b.title)),
        SortSegment::DateStarted => books.sort_by(|a, b| b.date_started.cmp(&a.date_started)),
        SortSegment::DateFinished => books.sort_by(|a, b| b.date_finished.cmp(&a.date_finished)),
    }
}
