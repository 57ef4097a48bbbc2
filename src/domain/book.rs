//! Book domain model.
//!
//! A `Book` is one entry of the personal reading list. Dates are kept exactly as
//! the reader typed them; they are not guaranteed to parse as calendar dates, so
//! sorting compares the raw strings and searching goes through a
//! [`DateFormatter`](crate::infrastructure::DateFormatter).

use serde::{Deserialize, Serialize};

/// One entry of the reading list.
///
/// # Fields
///
/// - `id`: Remote identifier, `None` for entries that never left the device
/// - `title`: Title as stored; sorting is case-sensitive on this value
/// - `author`: Free-form author text, not used by filtering or sorting
/// - `date_started`: Human-entered start date
/// - `date_finished`: Human-entered finish date, may be empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date_started: String,
    #[serde(default)]
    pub date_finished: String,
}

impl Book {
    /// Creates a book with no id and no author.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelfview::Book;
    ///
    /// let book = Book::new("Dune", "2019-04-15", "2019-05-02");
    /// assert_eq!(book.title, "Dune");
    /// assert!(book.id.is_none());
    /// ```
    pub fn new(
        title: impl Into<String>,
        date_started: impl Into<String>,
        date_finished: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            author: String::new(),
            date_started: date_started.into(),
            date_finished: date_finished.into(),
        }
    }

    /// Sets the author, builder style.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Sets the remote identifier, builder style.
    #[must_use]
    pub const fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Whether the reader has recorded a finish date.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.date_finished.trim().is_empty()
    }
}
