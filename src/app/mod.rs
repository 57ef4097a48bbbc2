//! Application layer: the book list state manager and its helpers.
//!
//! This module sits between the UI (which issues load/refresh/filter/sort calls
//! and renders the visible list) and the storage layer (which fetches and
//! persists books).
//!
//! ```text
//! UI ──load/refresh──▶ BookListStateManager ──get_all/save──▶ BookSource
//!  ▲                         │
//!  └──── Observable<Vec<Book>> (visible list) ◀──┘
//! ```
//!
//! # Modules
//!
//! - [`modes`]: Scope button and sort segment selectors with UI labels
//! - [`observable`]: Single-threaded multicast value holder
//! - [`query`]: Pure filter and sort helpers
//! - [`state`]: The state manager

pub mod modes;
pub mod observable;
pub mod query;
pub mod state;

pub use modes::{scope_button_titles, ScopeButton, SortSegment};
pub use observable::{Observable, Subscription};
pub use state::BookListStateManager;
