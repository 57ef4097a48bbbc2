//! JSON file-based local book store.
//!
//! This module provides a simple, human-readable storage implementation using
//! JSON serialization. It uses atomic file writes (write-to-temp + rename) to
//! prevent corruption on crashes.
//!
//! # Performance Characteristics
//!
//! - **Read**: loads entire file into memory once, on open
//! - **Write**: serializes and writes the entire list on every save
//! - **Best for**: personal reading lists (hundreds to low thousands of books)

use crate::domain::error::{Result, ShelfviewError};
use crate::domain::Book;
use crate::storage::backend::LocalBooks;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const STORE_VERSION: u32 = 1;

/// JSON storage container format.
///
/// This is the top-level structure serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Books in the order they were last saved.
    #[serde(default)]
    books: Vec<Book>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: STORE_VERSION,
            books: Vec::new(),
        }
    }
}

/// JSON file book store.
///
/// The entire list is kept in memory and written through on every
/// [`save`](LocalBooks::save).
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "books": [
///     {
///       "id": 12,
///       "title": "Harry Potter",
///       "author": "J. K. Rowling",
///       "date_started": "2019-04-15",
///       "date_finished": "2019-05-01"
///     }
///   ]
/// }
/// ```
#[derive(Debug)]
pub struct JsonBookStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data cache, loaded on creation.
    data: StoreData,

    /// Set when the in-memory list has not reached disk yet.
    dirty: bool,
}

impl JsonBookStore {
    /// Creates or opens a JSON book store.
    ///
    /// If the file exists, loads existing data. Otherwise starts empty; the file
    /// is created on the first save. Parent directories are created eagerly.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use shelfview::storage::JsonBookStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonBookStore::new(PathBuf::from("/tmp/books.json"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening JSON book store");

        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty store");
            StoreData::default()
        };

        tracing::debug!(book_count = data.books.len(), "book store opened");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Loads store data from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid JSON, or
    /// was written by a newer format version.
    fn load_from_file(path: &Path) -> Result<StoreData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StoreData = serde_json::from_str(&contents)
            .map_err(|e| ShelfviewError::Storage(format!("failed to parse JSON: {e}")))?;

        if data.version > STORE_VERSION {
            return Err(ShelfviewError::Storage(format!(
                "unsupported store version {} (expected <= {STORE_VERSION})",
                data.version
            )));
        }

        tracing::debug!(
            version = data.version,
            books = data.books.len(),
            "loaded store data"
        );

        Ok(data)
    }

    /// Writes the in-memory list to disk using an atomic rename.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write, or the rename fails.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| ShelfviewError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "book store saved");
        Ok(())
    }
}

impl LocalBooks for JsonBookStore {
    fn get_all(&self) -> Result<Vec<Book>> {
        let _span = tracing::debug_span!("json_get_all_books").entered();

        let books = self.data.books.clone();

        tracing::debug!(count = books.len(), "retrieved books");
        Ok(books)
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        let _span = tracing::debug_span!("json_save_books", count = books.len()).entered();

        self.data.books = books.to_vec();
        self.data.version = STORE_VERSION;
        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonBookStore {
    /// Retries a save that failed earlier so the last accepted list is not lost.
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}
