//! Generic query engine for the application's list views.
//!
//! This module provides free-text search over a configurable set of fields,
//! date-range filtering, categorical filtering, stable sorting, and page
//! slicing with derived pagination metadata. Every stage is a pure function
//! over an immutable input collection; the [`Query`] builder chains them as
//! one derivation, `paginate(sort(filter(search(items))))`, so nothing
//! reactive needs to observe mutations to keep pagination in sync.
//!
//! # Example
//!
//! ```
//! use books_engine::query::{Query, SortOrder};
//!
//! struct Contact {
//!     name: String,
//!     company: String,
//! }
//!
//! let contacts = vec![
//!     Contact { name: "Priya Nair".to_string(), company: "Northwind".to_string() },
//!     Contact { name: "Asha Rahman".to_string(), company: "Acme Traders".to_string() },
//! ];
//!
//! let page = Query::over(&contacts)
//!     .search(&[|c: &Contact| Some(c.name.as_str())], "a")
//!     .sort_by_text(|c| Some(c.name.as_str()), SortOrder::Asc)
//!     .page(1, 10);
//!
//! assert_eq!(page.items[0].name, "Asha Rahman");
//! assert_eq!(page.pagination.total, 2);
//! ```

mod date_range;
mod paginate;
mod search;
mod sort;

pub use date_range::{DateField, filter_by_date_range};
pub use paginate::{Page, Pagination, paginate, total_pages};
pub use search::{TextField, search};
pub use sort::{SortOrder, compare_text, sort_items};

use std::cmp::Ordering;

use crate::models::{DateRange, SearchFilters};

/// Binds the fields of a [`SearchFilters`] value to typed accessors on a
/// record type: which fields free text searches over, which date field a
/// range applies to, and which fields the status/category filters match.
pub struct FilterBindings<T> {
    /// Fields searched by the free-text query.
    pub search_fields: Vec<TextField<T>>,
    /// The field a date-range filter applies to, if any.
    pub date_field: Option<DateField<T>>,
    /// The field the status filter matches exactly, if any.
    pub status_field: Option<TextField<T>>,
    /// The field the category filter matches exactly, if any.
    pub category_field: Option<TextField<T>>,
}

impl<T> Default for FilterBindings<T> {
    fn default() -> Self {
        Self {
            search_fields: Vec::new(),
            date_field: None,
            status_field: None,
            category_field: None,
        }
    }
}

/// A chain of query stages over a borrowed record collection.
///
/// Each stage narrows or reorders the current subsequence; the terminal
/// [`collect`](Self::collect) or [`page`](Self::page) yields the result.
/// Filter stages preserve input order.
pub struct Query<'a, T> {
    items: Vec<&'a T>,
}

impl<'a, T> Query<'a, T> {
    /// Starts a query over the full collection.
    pub fn over(items: &'a [T]) -> Self {
        Self {
            items: items.iter().collect(),
        }
    }

    /// Narrows to items matching the free-text term on any of the fields.
    ///
    /// A term that is blank after trimming leaves the query unchanged.
    pub fn search(mut self, fields: &[TextField<T>], term: &str) -> Self {
        let needle = term.trim().to_lowercase();
        if !needle.is_empty() {
            self.items
                .retain(|item| search::matches_term(*item, fields, &needle));
        }
        self
    }

    /// Narrows to items whose date falls within the range (inclusive).
    ///
    /// `None` leaves the query unchanged.
    pub fn date_range(mut self, field: DateField<T>, range: Option<&DateRange>) -> Self {
        if let Some(range) = range {
            self.items
                .retain(|item| field(item).is_some_and(|date| range.contains(date)));
        }
        self
    }

    /// Narrows to items whose field equals the given value exactly.
    ///
    /// `None` leaves the query unchanged; items whose accessor returns
    /// `None` never match an active filter.
    pub fn matching(mut self, field: TextField<T>, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.items.retain(|item| field(item) == Some(value));
        }
        self
    }

    /// Applies a full [`SearchFilters`] selection through its bindings:
    /// free-text search, then date range, then status and category.
    pub fn filtered(self, filters: &SearchFilters, bindings: &FilterBindings<T>) -> Self {
        let mut query = self.search(&bindings.search_fields, &filters.query);
        if let Some(field) = bindings.date_field {
            query = query.date_range(field, filters.date_range.as_ref());
        }
        if let Some(field) = bindings.status_field {
            query = query.matching(field, filters.status.as_deref());
        }
        if let Some(field) = bindings.category_field {
            query = query.matching(field, filters.category.as_deref());
        }
        query
    }

    /// Stably sorts with a comparator and direction.
    pub fn sort_by<F>(mut self, compare: F, order: SortOrder) -> Self
    where
        F: Fn(&T, &T) -> Ordering,
    {
        sort::sort_items(&mut self.items, compare, order);
        self
    }

    /// Stably sorts by a text field, case-insensitively.
    pub fn sort_by_text(self, field: TextField<T>, order: SortOrder) -> Self {
        self.sort_by(
            move |a, b| sort::compare_text(field(a), field(b)),
            order,
        )
    }

    /// Stably sorts by an ordered key.
    pub fn sort_by_key<K: Ord>(self, key: fn(&T) -> K, order: SortOrder) -> Self {
        self.sort_by(move |a, b| key(a).cmp(&key(b)), order)
    }

    /// The number of items currently matched.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no items are currently matched.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Finishes the query, returning the matched items in their current order.
    pub fn collect(self) -> Vec<&'a T> {
        self.items
    }

    /// Finishes the query with one page of results and derived pagination
    /// metadata.
    pub fn page(self, page: usize, page_size: usize) -> Page<'a, T> {
        paginate::paginate(self.items, page, page_size)
    }
}
