//! Book source abstractions.
//!
//! The state manager only sees [`BookSource`]: "give me every book from this
//! [`Origin`]" and "keep this list locally". Concrete repositories sit behind the
//! narrower [`LocalBooks`] and [`RemoteBooks`] traits and are combined by
//! [`BooksRepositoryManager`](crate::storage::BooksRepositoryManager).
//!
//! # Design
//!
//! Everything runs on one thread. Futures are `LocalBoxFuture<'static, _>` so a
//! source may hold `Rc` state, and so the manager can drive a fetch without
//! borrowing the source for the duration.

use crate::domain::error::Result;
use crate::domain::Book;
use futures_util::future::LocalBoxFuture;

/// Where a fetch should read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// The on-device cache.
    Local,

    /// The remote reading-list service.
    Remote,
}

/// Capability set the state manager consumes.
///
/// # Errors
///
/// `get_all` failures should be reported as
/// [`ShelfviewError::Fetch`](crate::ShelfviewError::Fetch) and `save` failures as
/// [`ShelfviewError::Persist`](crate::ShelfviewError::Persist). The manager logs
/// both and never surfaces them to its callers.
pub trait BookSource {
    /// Fetches every book from `origin`, in the order the source keeps them.
    fn get_all(&self, origin: Origin) -> LocalBoxFuture<'static, Result<Vec<Book>>>;

    /// Replaces the locally persisted list with `books`.
    fn save(&self, books: Vec<Book>) -> LocalBoxFuture<'static, Result<()>>;
}

/// On-device book repository.
///
/// Local storage is synchronous; [`BooksRepositoryManager`](crate::storage::BooksRepositoryManager)
/// adapts it to the async [`BookSource`] contract.
pub trait LocalBooks {
    /// Retrieves all stored books in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn get_all(&self) -> Result<Vec<Book>>;

    /// Replaces the stored list with `books`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write operation fails. The previous contents may
    /// have been kept, depending on the backend.
    fn save(&mut self, books: &[Book]) -> Result<()>;
}

/// Remote reading-list service.
///
/// The crate ships no network client; hosts implement this over their own
/// transport and authentication.
pub trait RemoteBooks {
    /// Fetches the reader's full list from the service.
    fn get_all(&self) -> LocalBoxFuture<'static, Result<Vec<Book>>>;
}
