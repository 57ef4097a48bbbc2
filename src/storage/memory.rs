//! In-memory local book store.

use crate::domain::error::Result;
use crate::domain::Book;
use crate::storage::backend::LocalBooks;

/// [`LocalBooks`] that never touches disk.
///
/// Useful for ephemeral sessions and for exercising the state manager in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryBookStore {
    books: Vec<Book>,
    save_count: usize,
}

impl MemoryBookStore {
    /// Creates a store pre-filled with `books`.
    #[must_use]
    pub const fn with_books(books: Vec<Book>) -> Self {
        Self {
            books,
            save_count: 0,
        }
    }

    /// Number of successful [`save`](LocalBooks::save) calls so far.
    #[must_use]
    pub const fn save_count(&self) -> usize {
        self.save_count
    }
}

impl LocalBooks for MemoryBookStore {
    fn get_all(&self) -> Result<Vec<Book>> {
        Ok(self.books.clone())
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        self.books = books.to_vec();
        self.save_count += 1;
        tracing::debug!(count = books.len(), "books saved in memory");
        Ok(())
    }
}
