//! Page slicing and derived pagination metadata.
//!
//! Pagination state is always derived from the filtered collection, never an
//! authoritative input: `total` is the filtered length and `total_pages` is
//! recomputed from it on every call.

use serde::{Deserialize, Serialize};

/// Derived pagination metadata for a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// The page actually returned (1-based, clamped into range).
    pub page: usize,
    /// The page size used for slicing.
    pub page_size: usize,
    /// Total items across all pages.
    pub total: usize,
    /// Total number of pages; zero when there are no items.
    pub total_pages: usize,
}

/// One page of results with its derived metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    /// The items on this page, in input order.
    pub items: Vec<&'a T>,
    /// The derived pagination metadata.
    pub pagination: Pagination,
}

/// Returns the number of pages needed for `total` items.
///
/// Zero when `total` is zero; a zero `page_size` is treated as one.
///
/// # Examples
///
/// ```
/// use books_engine::query::total_pages;
///
/// assert_eq!(total_pages(0, 10), 0);
/// assert_eq!(total_pages(25, 10), 3);
/// assert_eq!(total_pages(30, 10), 3);
/// ```
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Slices one page out of a filtered result set.
///
/// The requested page is clamped to `1..=max(1, total_pages)`, so a page
/// left pointing past the end after a filter change comes back as the last
/// non-empty page instead of an empty out-of-range one. The returned slice
/// covers `(page - 1) * page_size .. page * page_size` and its length is
/// `min(page_size, total - (page - 1) * page_size)`.
///
/// # Examples
///
/// ```
/// use books_engine::query::paginate;
///
/// let items: Vec<u32> = (1..=25).collect();
/// let refs: Vec<&u32> = items.iter().collect();
///
/// let page = paginate(refs, 3, 10);
/// assert_eq!(page.items.len(), 5);
/// assert_eq!(page.pagination.total, 25);
/// assert_eq!(page.pagination.total_pages, 3);
/// ```
pub fn paginate<'a, T>(items: Vec<&'a T>, page: usize, page_size: usize) -> Page<'a, T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let pages = total_pages(total, page_size);
    let page = page.clamp(1, pages.max(1));

    let start = (page - 1) * page_size;
    let items: Vec<&T> = items.into_iter().skip(start).take(page_size).collect();

    Page {
        items,
        pagination: Pagination {
            page,
            page_size,
            total,
            total_pages: pages,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(count: usize) -> Vec<usize> {
        (1..=count).collect()
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(21, 10), 3);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(1, 10), 1);
    }

    #[test]
    fn test_total_pages_is_zero_for_no_items() {
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn test_first_page_has_page_size_items() {
        let items = numbers(25);
        let page = paginate(items.iter().collect(), 1, 10);

        assert_eq!(page.items.len(), 10);
        assert_eq!(*page.items[0], 1);
        assert_eq!(*page.items[9], 10);
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.pagination.total, 25);
        assert_eq!(page.pagination.total_pages, 3);
    }

    #[test]
    fn test_last_page_holds_the_remainder() {
        let items = numbers(25);
        let page = paginate(items.iter().collect(), 3, 10);

        assert_eq!(page.items.len(), 5);
        assert_eq!(*page.items[0], 21);
        assert_eq!(*page.items[4], 25);
    }

    #[test]
    fn test_out_of_range_page_clamps_to_last() {
        let items = numbers(25);
        let page = paginate(items.iter().collect(), 9, 10);

        assert_eq!(page.pagination.page, 3);
        assert_eq!(page.items.len(), 5);
    }

    #[test]
    fn test_page_zero_clamps_to_first() {
        let items = numbers(25);
        let page = paginate(items.iter().collect(), 0, 10);

        assert_eq!(page.pagination.page, 1);
        assert_eq!(*page.items[0], 1);
    }

    #[test]
    fn test_empty_collection_yields_empty_first_page() {
        let items: Vec<usize> = vec![];
        let page = paginate(items.iter().collect(), 1, 10);

        assert!(page.items.is_empty());
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.pagination.total, 0);
        assert_eq!(page.pagination.total_pages, 0);
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let items = numbers(3);
        let page = paginate(items.iter().collect(), 2, 0);

        assert_eq!(page.pagination.page_size, 1);
        assert_eq!(page.items.len(), 1);
        assert_eq!(*page.items[0], 2);
        assert_eq!(page.pagination.total_pages, 3);
    }

    #[test]
    fn test_exact_multiple_has_no_ragged_page() {
        let items = numbers(20);
        let page = paginate(items.iter().collect(), 2, 10);

        assert_eq!(page.items.len(), 10);
        assert_eq!(page.pagination.total_pages, 2);
    }

    #[test]
    fn test_slice_length_law() {
        let items = numbers(23);
        for page_number in 1..=5 {
            let page = paginate(items.iter().collect(), page_number, 7);
            let start = (page.pagination.page - 1) * 7;
            let expected = 7.min(23usize.saturating_sub(start));
            assert_eq!(page.items.len(), expected);
        }
    }
}
