//! Filter state models for the query engine.
//!
//! These types describe the transient filter selections held by a list view:
//! a free-text query, an optional inclusive date range, and optional
//! categorical filters. The query engine itself is a pure function of this
//! state plus the record collection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive date range.
///
/// Both bounds are required; a half-open selection in the surrounding UI is
/// simply no range at all.
///
/// # Example
///
/// ```
/// use books_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange {
///     from: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
///     to: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
/// };
/// assert!(range.contains(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()));
/// assert!(range.contains(NaiveDate::from_ymd_opt(2026, 3, 31).unwrap()));
/// assert!(!range.contains(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// The first day of the range (inclusive).
    pub from: NaiveDate,
    /// The last day of the range (inclusive).
    pub to: NaiveDate,
}

impl DateRange {
    /// Returns true if the date falls within the range, inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }
}

/// The filter selections a list view holds between interactions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Free-text search query. Blank means no text filtering.
    #[serde(default)]
    pub query: String,
    /// Optional date range filter.
    #[serde(default)]
    pub date_range: Option<DateRange>,
    /// Optional status filter (exact match).
    #[serde(default)]
    pub status: Option<String>,
    /// Optional category filter (exact match).
    #[serde(default)]
    pub category: Option<String>,
}
