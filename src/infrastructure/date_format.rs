//! Date string normalization for text search.
//!
//! Reading-list dates are typed by hand, so the same month can arrive as
//! `2019-04-15`, `04/15/2019`, or `Apr 15, 2019`. The state manager never parses
//! dates itself; it asks a [`DateFormatter`] to render them in a fixed
//! [`DatePattern`] and matches query tokens against the result.

use chrono::{DateTime, NaiveDate};

/// Full-date layouts tried in order.
const DAY_FORMATS: [&str; 7] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Month-precision layouts. Parsed by appending a fixed day of month.
const MONTH_FORMATS: [&str; 4] = ["%Y-%m", "%Y/%m", "%m/%Y", "%B %Y"];

/// Output layouts supported by [`DateFormatter::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePattern {
    /// Full month name and year, e.g. `April 2019`.
    MonthYear,

    /// Full month name, day, and year, e.g. `April 15, 2019`.
    Long,
}

impl DatePattern {
    /// `chrono` format string for this pattern.
    #[must_use]
    pub const fn as_format(self) -> &'static str {
        match self {
            Self::MonthYear => "%B %Y",
            Self::Long => "%B %-d, %Y",
        }
    }
}

/// Converts a free-form date string into a normalized representation.
///
/// Implementations must be pure and must not panic on garbage input; what they
/// return for unrecognized text is up to them.
pub trait DateFormatter {
    /// Formats `date` using `pattern`.
    fn format(&self, date: &str, pattern: DatePattern) -> String;
}

/// [`DateFormatter`] backed by `chrono`.
///
/// Recognizes ISO dates, RFC 3339 timestamps, US slash dates, and written
/// month names. Anything else is returned trimmed but otherwise unchanged, so a
/// bare year like `2019` still matches a `2019` query.
///
/// # Examples
///
/// ```
/// use shelfview::infrastructure::{ChronoDateFormatter, DateFormatter, DatePattern};
///
/// let formatter = ChronoDateFormatter;
/// assert_eq!(formatter.format("2019-04-15", DatePattern::MonthYear), "April 2019");
/// assert_eq!(formatter.format("someday", DatePattern::MonthYear), "someday");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoDateFormatter;

impl ChronoDateFormatter {
    /// Parses the date layouts this formatter understands.
    fn parse(input: &str) -> Option<NaiveDate> {
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
            return Some(timestamp.date_naive());
        }

        DAY_FORMATS
            .iter()
            .find_map(|layout| NaiveDate::parse_from_str(input, layout).ok())
            .or_else(|| {
                let padded = format!("{input} 01");
                MONTH_FORMATS.iter().find_map(|layout| {
                    NaiveDate::parse_from_str(&padded, &format!("{layout} %d")).ok()
                })
            })
    }
}

impl DateFormatter for ChronoDateFormatter {
    fn format(&self, date: &str, pattern: DatePattern) -> String {
        let trimmed = date.trim();
        Self::parse(trimmed).map_or_else(
            || {
                tracing::trace!(date = %trimmed, "unrecognized date, using raw text");
                trimmed.to_string()
            },
            |parsed| parsed.format(pattern.as_format()).to_string(),
        )
    }
}
