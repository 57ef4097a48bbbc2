//! Storage layer for the reading list.
//!
//! This module provides the [`BookSource`] abstraction the state manager pulls
//! from, plus the local and remote repository seams behind it.
//!
//! # Modules
//!
//! - `backend`: `BookSource`, `LocalBooks`, and `RemoteBooks` traits
//! - `json`: JSON file-based local store
//! - `memory`: in-memory local store
//! - `repository`: manager routing fetches by origin

pub mod backend;
pub mod json;
pub mod memory;
pub mod repository;

pub use backend::{BookSource, LocalBooks, Origin, RemoteBooks};
pub use json::JsonBookStore;
pub use memory::MemoryBookStore;
pub use repository::BooksRepositoryManager;
