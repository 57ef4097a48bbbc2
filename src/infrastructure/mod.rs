//! Infrastructure layer for environment interactions.
//!
//! Provides the default store location and the date formatter the state manager
//! uses to match date queries.

pub mod date_format;
pub mod paths;

pub use date_format::{ChronoDateFormatter, DateFormatter, DatePattern};
pub use paths::{default_store_path, expand_tilde, get_data_dir};
