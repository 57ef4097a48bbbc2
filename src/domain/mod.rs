//! Domain layer for the reading-list core.
//!
//! This module contains the core domain types, independent of storage backends,
//! date parsing, or how the visible list is presented.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`book`]: Book domain model
//!
//! # Examples
//!
//! ```
//! use shelfview::domain::{Book, Result};
//!
//! fn first_book() -> Result<Book> {
//!     Ok(Book::new("Harry Potter", "2019-04-15", "2019-05-01"))
//! }
//! ```

pub mod book;
pub mod error;

pub use book::Book;
pub use error::{Result, ShelfviewError};
