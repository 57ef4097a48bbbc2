//! Shelfview: the state core of a personal reading-list app.
//!
//! Shelfview provides:
//! - A book list state manager holding the canonical list from the last fetch
//! - Non-destructive title and date search over that list
//! - Sorting of the visible projection by title or reading dates
//! - An observable visible list that UI code subscribes to
//! - Local JSON persistence with a pluggable remote source

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host UI (screens, navigation)                      │  ← Not in this crate
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - BookListStateManager                             │
//! │  - Filter/sort helpers, scope & segment selectors   │
//! │  - Observable visible list                          │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────────────┐        ┌───────────────────────┐
//! │ Storage Layer         │        │ Infrastructure        │
//! │ (storage/)            │        │ (infrastructure/)     │
//! │ - BookSource trait    │        │ - Date formatting     │
//! │ - JSON / memory store │        │ - Data directory      │
//! │ - Repository manager  │        │                       │
//! └───────────────────────┘        └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/): Book, errors                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: State manager, observable, query helpers
//! - [`domain`]: Core domain types (Book, errors)
//! - [`infrastructure`]: Date formatting and paths
//! - [`storage`]: Book sources and local persistence
//! - [`observability`]: `tracing` subscriber setup
//!
//! # Configuration
//!
//! ```toml
//! # shelfview.toml
//! store_path = "~/.local/share/shelfview/books.json"
//! trace_level = "debug"
//! ```
//!
//! # Threading
//!
//! Everything is single-threaded. `load` and `refresh` return futures the host
//! drives on its UI-thread executor; completions never race each other, but the
//! last one to complete wins.

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;

pub use app::{BookListStateManager, Observable, ScopeButton, SortSegment, Subscription};
pub use domain::{Book, Result, ShelfviewError};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use storage::{BooksRepositoryManager, JsonBookStore, RemoteBooks};

/// Library configuration.
///
/// Built from a string map handed over by the host app ([`Config::from_map`])
/// or from a TOML file ([`Config::from_file`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Location of the local JSON store.
    ///
    /// A leading `~` is expanded. Default: `<data dir>/books.json`, see
    /// [`infrastructure::get_data_dir`].
    pub store_path: Option<String>,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// Unknown keys are ignored; blank values count as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use shelfview::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// assert!(config.store_path.is_none());
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let non_blank = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            store_path: non_blank("store_path"),
            trace_level: non_blank("trace_level"),
        }
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfviewError::Io`] if the file cannot be read and
    /// [`ShelfviewError::Config`] if it is not valid TOML for this struct.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| ShelfviewError::Config(format!("{}: {e}", path.display())))
    }

    /// Resolved location of the local JSON store.
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.store_path.as_deref().map_or_else(infrastructure::default_store_path, |p| {
            PathBuf::from(infrastructure::expand_tilde(p))
        })
    }
}

/// Builds a state manager backed by the configured JSON store and `remote`.
///
/// Installs the tracing subscriber when `trace_level` is set, opens (or creates)
/// the local store, and wires both repositories behind a
/// [`BooksRepositoryManager`]. The returned manager starts empty; call
/// [`load`](BookListStateManager::load) to populate it.
///
/// # Errors
///
/// Returns an error if the local store cannot be opened.
pub fn initialize<R: RemoteBooks + 'static>(config: &Config, remote: R) -> Result<BookListStateManager> {
    if config.trace_level.is_some() {
        observability::init_tracing(config);
    }

    let store_path = config.store_path();
    tracing::debug!(store_path = ?store_path, "initializing shelfview");

    let local = JsonBookStore::new(store_path)?;
    let repositories = BooksRepositoryManager::new(local, remote);

    Ok(BookListStateManager::new(Rc::new(repositories)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::future::{self, LocalBoxFuture};
    use futures_util::FutureExt;
    use crate::storage::LocalBooks;

    struct FixedRemote(Vec<Book>);

    impl RemoteBooks for FixedRemote {
        fn get_all(&self) -> LocalBoxFuture<'static, Result<Vec<Book>>> {
            future::ready(Ok(self.0.clone())).boxed_local()
        }
    }

    #[test]
    fn from_map_ignores_blank_values() {
        let mut map = BTreeMap::new();
        map.insert("store_path".to_string(), "  ".to_string());
        map.insert("trace_level".to_string(), " warn ".to_string());

        let config = Config::from_map(&map);

        assert_eq!(config.store_path, None);
        assert_eq!(config.trace_level.as_deref(), Some("warn"));
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shelfview.toml");
        std::fs::write(&path, "store_path = \"/tmp/books.json\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.store_path(), PathBuf::from("/tmp/books.json"));
        assert_eq!(config.trace_level, None);
    }

    #[test]
    fn from_file_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shelfview.toml");
        std::fs::write(&path, "store_path = [1, 2").unwrap();

        assert!(matches!(Config::from_file(&path), Err(ShelfviewError::Config(_))));
    }

    #[test]
    fn initialize_refresh_persists_to_json_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        let config = Config {
            store_path: Some(path.to_string_lossy().into_owned()),
            trace_level: None,
        };
        let remote = vec![Book::new("Dune", "2019-04-15", "2019-05-02")];

        let manager = initialize(&config, FixedRemote(remote.clone())).unwrap();
        manager.refresh().now_or_never().unwrap();
        assert_eq!(manager.books(), remote);
        drop(manager);

        let reopened = JsonBookStore::new(path.clone()).unwrap();
        assert_eq!(reopened.get_all().unwrap(), remote);

        let fresh = initialize(&config, FixedRemote(vec![])).unwrap();
        fresh.load().now_or_never().unwrap();
        assert_eq!(fresh.books(), remote);
    }
}
