//! Search scope and sort segment selectors.
//!
//! These enums back the two segmented controls above the book list: the search
//! bar's scope buttons and the sort picker. Both carry the labels the UI shows and
//! convert from the raw control index, rejecting indices they do not know.
//!
//! # Example
//!
//! ```rust
//! use shelfview::app::modes::{ScopeButton, SortSegment};
//!
//! let scope = ScopeButton::try_from(1).unwrap();
//! assert_eq!(scope, ScopeButton::DateStarted);
//! assert_eq!(scope.placeholder(), "Ex: 2019, April 2019, Apr 2019");
//!
//! assert!(SortSegment::try_from(7).is_err());
//! ```

use crate::domain::ShelfviewError;
use std::fmt;

/// Which book field a search query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScopeButton {
    /// Case-insensitive substring match on the title.
    #[default]
    Title,

    /// Token match on the start date rendered as "Month Year".
    DateStarted,

    /// Token match on the finish date rendered as "Month Year".
    DateFinished,
}

impl ScopeButton {
    /// Every scope, in control index order.
    pub const ALL: [Self; 3] = [Self::Title, Self::DateStarted, Self::DateFinished];

    /// Label shown on the scope button.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::DateStarted => "Date Started",
            Self::DateFinished => "Date Finished",
        }
    }

    /// Hint shown in the empty search field while this scope is selected.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Title => "Ex: Harry Potter",
            Self::DateStarted | Self::DateFinished => "Ex: 2019, April 2019, Apr 2019",
        }
    }

    /// Position of this scope in the segmented control.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for ScopeButton {
    type Error = ShelfviewError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ShelfviewError::InvalidIndex {
                kind: "scope button",
                index,
            })
    }
}

impl fmt::Display for ScopeButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Scope button labels in control index order.
#[must_use]
pub const fn scope_button_titles() -> [&'static str; 3] {
    [
        ScopeButton::Title.title(),
        ScopeButton::DateStarted.title(),
        ScopeButton::DateFinished.title(),
    ]
}

/// Which field the visible list is sorted by.
///
/// Titles sort ascending; dates sort descending (most recent first) by raw
/// string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortSegment {
    #[default]
    Title,
    DateStarted,
    DateFinished,
}

impl SortSegment {
    /// Every segment, in control index order.
    pub const ALL: [Self; 3] = [Self::Title, Self::DateStarted, Self::DateFinished];

    /// Label shown on the sort picker.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::DateStarted => "Date Started",
            Self::DateFinished => "Date Finished",
        }
    }

    /// Whether this segment sorts largest first.
    #[must_use]
    pub const fn is_descending(self) -> bool {
        !matches!(self, Self::Title)
    }

    /// Position of this segment in the sort picker.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for SortSegment {
    type Error = ShelfviewError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ShelfviewError::InvalidIndex {
                kind: "sort segment",
                index,
            })
    }
}

impl fmt::Display for SortSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_round_trip_through_controls() {
        for scope in ScopeButton::ALL {
            assert_eq!(ScopeButton::try_from(scope.index()).unwrap(), scope);
        }
        for segment in SortSegment::ALL {
            assert_eq!(SortSegment::try_from(segment.index()).unwrap(), segment);
        }
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let err = ScopeButton::try_from(3).unwrap_err();
        assert_eq!(err.to_string(), "invalid scope button index: 3");
        assert!(SortSegment::try_from(usize::MAX).is_err());
    }

    #[test]
    fn labels_and_placeholders() {
        assert_eq!(scope_button_titles(), ["Title", "Date Started", "Date Finished"]);
        assert_eq!(ScopeButton::Title.placeholder(), "Ex: Harry Potter");
        assert_eq!(
            ScopeButton::DateFinished.placeholder(),
            "Ex: 2019, April 2019, Apr 2019"
        );
        assert_eq!(SortSegment::DateFinished.to_string(), "Date Finished");
    }

    #[test]
    fn only_title_sorts_ascending() {
        assert!(!SortSegment::Title.is_descending());
        assert!(SortSegment::DateStarted.is_descending());
        assert!(SortSegment::DateFinished.is_descending());
    }
}
