//! Path utilities for locating the local book store.
//!
//! Resolves the per-user data directory and expands `~` in configured paths.

use std::path::PathBuf;

/// File name of the JSON store inside the data directory.
pub const STORE_FILE_NAME: &str = "books.json";

/// Returns the data directory for shelfview storage.
///
/// Uses `$XDG_DATA_HOME/shelfview` when set, otherwise
/// `$HOME/.local/share/shelfview`. Falls back to a relative `.shelfview`
/// directory when neither variable is available.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join("shelfview");
    }

    std::env::var_os("HOME").map_or_else(
        || PathBuf::from(".shelfview"),
        |home| PathBuf::from(home).join(".local").join("share").join("shelfview"),
    )
}

/// Default location of the JSON book store.
#[must_use]
pub fn default_store_path() -> PathBuf {
    get_data_dir().join(STORE_FILE_NAME)
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde, or a tilde when `$HOME` is unset, are returned as-is.
///
/// # Examples
///
/// ```
/// use shelfview::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = std::env::var_os("HOME") else {
        return path.to_string();
    };
    let home = home.to_string_lossy();

    if let Some(rest) = path.strip_prefix("~/") {
        format!("{home}/{rest}")
    } else if path == "~" {
        home.into_owned()
    } else {
        path.to_string()
    }
}
