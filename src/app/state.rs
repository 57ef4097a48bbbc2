//! Book list state management.
//!
//! This module defines [`BookListStateManager`], the single source of truth for
//! the reading list shown on screen. It separates core data (the canonical list
//! from the last successful fetch) from derived state (the visible list after
//! filtering and sorting) and republishes the visible list through an
//! [`Observable`].
//!
//! # State Components
//!
//! - **Canonical books**: replaced wholesale by a successful `load`/`refresh`
//! - **Visible books**: published snapshot; `filter` derives it from the canonical
//!   list, `sort` reorders whatever is currently visible
//!
//! # Transitions
//!
//! ```text
//! Empty ──load/refresh──▶ Full ──filter──▶ Filtered ──sort──▶ Filtered+Sorted
//!                          ▲                                        │
//!                          └──────────── filter("") ◀───────────────┘
//! ```
//!
//! # Asynchronous Fetches
//!
//! `load` and `refresh` issue the request immediately and return a future the
//! host drives on its single-threaded executor. The future only holds a weak
//! reference to the manager's state: if the manager is dropped first, the
//! completion is ignored. Whichever fetch completes last wins; callers that need
//! strict ordering must await one fetch before issuing the next.
//!
//! # Example
//!
//! ```rust
//! use shelfview::app::{BookListStateManager, ScopeButton, SortSegment};
//! use shelfview::storage::{BooksRepositoryManager, MemoryBookStore, RemoteBooks};
//! use shelfview::{Book, Result};
//! use futures_util::future::{self, LocalBoxFuture};
//! use futures_util::FutureExt;
//! use std::rc::Rc;
//!
//! struct Offline;
//!
//! impl RemoteBooks for Offline {
//!     fn get_all(&self) -> LocalBoxFuture<'static, Result<Vec<Book>>> {
//!         future::ready(Ok(vec![])).boxed_local()
//!     }
//! }
//!
//! let local = MemoryBookStore::with_books(vec![
//!     Book::new("Zebra", "2019-01", "2019-02"),
//!     Book::new("Apple", "2018-05", "2018-06"),
//! ]);
//! let manager = BookListStateManager::new(Rc::new(BooksRepositoryManager::new(local, Offline)));
//!
//! manager.load().now_or_never();
//! manager.sort(SortSegment::Title);
//!
//! let titles: Vec<String> = manager.books().into_iter().map(|b| b.title).collect();
//! assert_eq!(titles, ["Apple", "Zebra"]);
//! ```

use super::modes::{ScopeButton, SortSegment};
use super::observable::Observable;
use super::query;
use crate::domain::Book;
use crate::infrastructure::{ChronoDateFormatter, DateFormatter};
use crate::storage::{BookSource, Origin};
use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::Instrument;

/// State shared between the manager and its in-flight fetches.
struct Shared {
    /// Books from the most recently completed fetch, in source order.
    canonical: RefCell<Vec<Book>>,

    /// Published projection shown by the UI.
    visible: Observable<Vec<Book>>,
}

impl Shared {
    /// Replaces the canonical list and publishes it unfiltered.
    fn replace(&self, books: Vec<Book>) {
        *self.canonical.borrow_mut() = books.clone();
        self.visible.set(books);
    }
}

/// Holds the canonical reading list and publishes its visible projection.
///
/// Collaborators are passed in explicitly: a [`BookSource`] for fetching and
/// persisting, and a [`DateFormatter`] used by date-scoped searches.
pub struct BookListStateManager {
    source: Rc<dyn BookSource>,
    formatter: Rc<dyn DateFormatter>,
    shared: Rc<Shared>,
}

impl BookListStateManager {
    /// Creates a manager with an empty list and the default [`ChronoDateFormatter`].
    #[must_use]
    pub fn new(source: Rc<dyn BookSource>) -> Self {
        Self::with_formatter(source, Rc::new(ChronoDateFormatter))
    }

    /// Creates a manager with an empty list and a custom date formatter.
    #[must_use]
    pub fn with_formatter(source: Rc<dyn BookSource>, formatter: Rc<dyn DateFormatter>) -> Self {
        Self {
            source,
            formatter,
            shared: Rc::new(Shared {
                canonical: RefCell::new(Vec::new()),
                visible: Observable::new(Vec::new()),
            }),
        }
    }

    /// Observable stream of the visible list.
    ///
    /// Subscribers receive the current snapshot on subscription and the full
    /// list after every operation that republishes it.
    #[must_use]
    pub fn visible_books(&self) -> &Observable<Vec<Book>> {
        &self.shared.visible
    }

    /// Current visible list.
    #[must_use]
    pub fn books(&self) -> Vec<Book> {
        self.shared.visible.get()
    }

    /// Current canonical list.
    #[must_use]
    pub fn canonical_books(&self) -> Vec<Book> {
        self.shared.canonical.borrow().clone()
    }

    /// Loads the list from the local cache.
    ///
    /// On success the canonical list is replaced and published unfiltered. On
    /// failure the error is logged and nothing changes. The returned future must
    /// be driven to completion for the result to be applied.
    pub fn load(&self) -> LocalBoxFuture<'static, ()> {
        self.fetch(Origin::Local)
    }

    /// Fetches the list from the remote service.
    ///
    /// On success the canonical list is replaced, published unfiltered, and then
    /// saved locally; a failed save is logged and does not roll back. On failure
    /// the error is logged, nothing changes, and nothing is saved.
    pub fn refresh(&self) -> LocalBoxFuture<'static, ()> {
        self.fetch(Origin::Remote)
    }

    /// Issues a fetch from `origin` and returns its completion handler.
    fn fetch(&self, origin: Origin) -> LocalBoxFuture<'static, ()> {
        let span = tracing::debug_span!("fetch_books", origin = ?origin);
        let request = span.in_scope(|| self.source.get_all(origin));
        let shared: Weak<Shared> = Rc::downgrade(&self.shared);
        let source = Rc::clone(&self.source);

        async move {
            let books = match request.await {
                Ok(books) => books,
                Err(e) => {
                    tracing::error!(error = %e, "failed to fetch books");
                    return;
                }
            };

            let Some(shared) = shared.upgrade() else {
                tracing::debug!("state manager dropped before fetch completed, ignoring result");
                return;
            };

            tracing::debug!(count = books.len(), "books fetched");
            shared.replace(books.clone());
            drop(shared);

            if origin == Origin::Remote {
                if let Err(e) = source.save(books).await {
                    tracing::warn!(error = %e, "failed to persist refreshed books");
                }
            }
        }
        .instrument(span)
        .boxed_local()
    }

    /// Publishes the canonical books matching `query` within `scope`.
    ///
    /// An empty query clears any previous filter. The result never depends on
    /// earlier filters or sorts.
    pub fn filter(&self, query: &str, scope: ScopeButton) {
        let _span = tracing::debug_span!("filter_books", query = %query, scope = ?scope).entered();

        let filtered = {
            let canonical = self.shared.canonical.borrow();
            query::filter_books(&canonical, query, scope, self.formatter.as_ref())
        };

        tracing::debug!(visible = filtered.len(), "filter applied");
        self.shared.visible.set(filtered);
    }

    /// [`filter`](Self::filter) driven by a raw scope control index.
    ///
    /// An empty query always resets to the canonical list. Otherwise an unknown
    /// index leaves the visible list untouched.
    pub fn filter_by_index(&self, query: &str, scope_index: usize) {
        if query.is_empty() {
            self.filter(query, ScopeButton::default());
            return;
        }

        match ScopeButton::try_from(scope_index) {
            Ok(scope) => self.filter(query, scope),
            Err(e) => tracing::debug!(error = %e, "ignoring filter request"),
        }
    }

    /// Reorders and republishes the current visible list.
    ///
    /// Sorting refines whatever the last filter produced; it never brings back
    /// books that were filtered out.
    pub fn sort(&self, segment: SortSegment) {
        let _span = tracing::debug_span!("sort_books", segment = ?segment).entered();

        let mut books = self.shared.visible.get();
        query::sort_books(&mut books, segment);

        tracing::debug!(visible = books.len(), "sort applied");
        self.shared.visible.set(books);
    }

    /// [`sort`](Self::sort) driven by a raw segment control index.
    ///
    /// An unknown index is a no-op.
    pub fn sort_by_index(&self, segment_index: usize) {
        match SortSegment::try_from(segment_index) {
            Ok(segment) => self.sort(segment),
            Err(e) => tracing::debug!(error = %e, "ignoring sort request"),
        }
    }
}

impl std::fmt::Debug for BookListStateManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookListStateManager")
            .field("canonical", &self.shared.canonical.borrow().len())
            .field("visible", &self.shared.visible.with(Vec::len))
            .finish_non_exhaustive()
    }
}
