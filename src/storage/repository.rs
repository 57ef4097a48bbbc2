//! Repository manager combining the local and remote book repositories.
//!
//! Routes [`Origin::Local`] fetches to a [`LocalBooks`] store and
//! [`Origin::Remote`] fetches to a [`RemoteBooks`] service. Saves always land in
//! the local store. Errors are normalized to the fetch/persist taxonomy the
//! state manager logs.

use crate::domain::error::{Result, ShelfviewError};
use crate::domain::Book;
use crate::storage::backend::{BookSource, LocalBooks, Origin, RemoteBooks};
use futures_util::future::{self, LocalBoxFuture};
use futures_util::FutureExt;
use std::cell::{Ref, RefCell};

/// Maps any error to [`ShelfviewError::Fetch`], keeping existing fetch errors as-is.
fn as_fetch(err: ShelfviewError) -> ShelfviewError {
    match err {
        err @ ShelfviewError::Fetch(_) => err,
        other => ShelfviewError::Fetch(other.to_string()),
    }
}

/// Maps any error to [`ShelfviewError::Persist`], keeping existing persist errors as-is.
fn as_persist(err: ShelfviewError) -> ShelfviewError {
    match err {
        err @ ShelfviewError::Persist(_) => err,
        other => ShelfviewError::Persist(other.to_string()),
    }
}

/// [`BookSource`] over one local and one remote repository.
///
/// # Examples
///
/// ```
/// use shelfview::storage::{BookSource, BooksRepositoryManager, MemoryBookStore, Origin, RemoteBooks};
/// use shelfview::{Book, Result};
/// use futures_util::future::{self, LocalBoxFuture};
/// use futures_util::FutureExt;
///
/// struct Offline;
///
/// impl RemoteBooks for Offline {
///     fn get_all(&self) -> LocalBoxFuture<'static, Result<Vec<Book>>> {
///         future::ready(Ok(vec![])).boxed_local()
///     }
/// }
///
/// let local = MemoryBookStore::with_books(vec![Book::new("Dune", "2019-04-15", "")]);
/// let repositories = BooksRepositoryManager::new(local, Offline);
///
/// let books = repositories.get_all(Origin::Local).now_or_never().unwrap()?;
/// assert_eq!(books.len(), 1);
/// # Ok::<(), shelfview::ShelfviewError>(())
/// ```
#[derive(Debug)]
pub struct BooksRepositoryManager<L, R> {
    local: RefCell<L>,
    remote: R,
}

impl<L: LocalBooks, R: RemoteBooks> BooksRepositoryManager<L, R> {
    /// Combines a local store and a remote service.
    pub const fn new(local: L, remote: R) -> Self {
        Self {
            local: RefCell::new(local),
            remote,
        }
    }

    /// Borrows the local repository.
    ///
    /// # Panics
    ///
    /// Panics if the local repository is currently being saved to, which cannot
    /// happen from outside this type on a single thread.
    #[must_use]
    pub fn local(&self) -> Ref<'_, L> {
        self.local.borrow()
    }

    /// Borrows the remote repository.
    #[must_use]
    pub const fn remote(&self) -> &R {
        &self.remote
    }
}

impl<L: LocalBooks, R: RemoteBooks> BookSource for BooksRepositoryManager<L, R> {
    fn get_all(&self, origin: Origin) -> LocalBoxFuture<'static, Result<Vec<Book>>> {
        let _span = tracing::debug_span!("repository_get_all", origin = ?origin).entered();

        match origin {
            Origin::Local => {
                let result = self
                    .local
                    .try_borrow()
                    .map_err(|e| ShelfviewError::Fetch(format!("local store busy: {e}")))
                    .and_then(|local| local.get_all().map_err(as_fetch));
                future::ready(result).boxed_local()
            }
            Origin::Remote => self
                .remote
                .get_all()
                .map(|result| result.map_err(as_fetch))
                .boxed_local(),
        }
    }

    fn save(&self, books: Vec<Book>) -> LocalBoxFuture<'static, Result<()>> {
        let _span = tracing::debug_span!("repository_save", count = books.len()).entered();

        let result = self
            .local
            .try_borrow_mut()
            .map_err(|e| ShelfviewError::Persist(format!("local store busy: {e}")))
            .and_then(|mut local| local.save(&books).map_err(as_persist));
        future::ready(result).boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBookStore;

    struct FixedRemote(std::result::Result<Vec<Book>, String>);

    impl RemoteBooks for FixedRemote {
        fn get_all(&self) -> LocalBoxFuture<'static, Result<Vec<Book>>> {
            let result = self.0.clone().map_err(ShelfviewError::Storage);
            future::ready(result).boxed_local()
        }
    }

    struct BrokenStore;

    impl LocalBooks for BrokenStore {
        fn get_all(&self) -> Result<Vec<Book>> {
            Err(ShelfviewError::Storage("corrupt".to_string()))
        }

        fn save(&mut self, _books: &[Book]) -> Result<()> {
            Err(ShelfviewError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full")))
        }
    }

    #[test]
    fn routes_origins_to_their_repository() {
        let local = MemoryBookStore::with_books(vec![Book::new("Local", "2019", "")]);
        let remote = FixedRemote(Ok(vec![Book::new("Remote", "2020", "")]));
        let repositories = BooksRepositoryManager::new(local, remote);

        let local_books = repositories.get_all(Origin::Local).now_or_never().unwrap().unwrap();
        let remote_books = repositories.get_all(Origin::Remote).now_or_never().unwrap().unwrap();

        assert_eq!(local_books[0].title, "Local");
        assert_eq!(remote_books[0].title, "Remote");
    }

    #[test]
    fn save_targets_local_store() {
        let repositories =
            BooksRepositoryManager::new(MemoryBookStore::default(), FixedRemote(Ok(vec![])));

        repositories
            .save(vec![Book::new("Saved", "2021-01-01", "")])
            .now_or_never()
            .unwrap()
            .unwrap();

        assert_eq!(repositories.local().save_count(), 1);
        assert_eq!(repositories.local().get_all().unwrap()[0].title, "Saved");
    }

    #[test]
    fn errors_are_normalized() {
        let repositories =
            BooksRepositoryManager::new(BrokenStore, FixedRemote(Err("offline".to_string())));

        let local = repositories.get_all(Origin::Local).now_or_never().unwrap();
        let remote = repositories.get_all(Origin::Remote).now_or_never().unwrap();
        let save = repositories.save(vec![]).now_or_never().unwrap();

        assert!(matches!(local, Err(ShelfviewError::Fetch(_))));
        assert!(matches!(remote, Err(ShelfviewError::Fetch(_))));
        assert!(matches!(save, Err(ShelfviewError::Persist(_))));
    }
}
