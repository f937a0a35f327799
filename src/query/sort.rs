//! Stable sorting helpers.
//!
//! Sorting is stable: equal keys keep their input order. A descending sort
//! reverses the comparator's output, never the pre-sorted sequence, so
//! stability holds in both directions.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// The direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

impl SortOrder {
    /// Applies the direction to a comparator result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Compares two optional text values case-insensitively.
///
/// `None` (no textual value) orders before any present value; two `None`s
/// compare equal.
///
/// # Examples
///
/// ```
/// use books_engine::query::compare_text;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_text(Some("acme"), Some("ACME")), Ordering::Equal);
/// assert_eq!(compare_text(Some("alpha"), Some("Beta")), Ordering::Less);
/// assert_eq!(compare_text(None, Some("alpha")), Ordering::Less);
/// ```
pub fn compare_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

/// Stably sorts a slice of item references with the given comparator and
/// direction.
pub fn sort_items<T, F>(items: &mut [&T], compare: F, order: SortOrder)
where
    F: Fn(&T, &T) -> Ordering,
{
    items.sort_by(|a, b| order.apply(compare(a, b)));
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Invoice {
        number: u32,
        client: String,
        total: i64,
    }

    fn invoice(number: u32, client: &str, total: i64) -> Invoice {
        Invoice {
            number,
            client: client.to_string(),
            total,
        }
    }

    fn create_invoices() -> Vec<Invoice> {
        vec![
            invoice(1, "acme", 500),
            invoice(2, "Beta Corp", 250),
            invoice(3, "ACME", 750),
            invoice(4, "delta", 250),
        ]
    }

    #[test]
    fn test_sort_order_apply() {
        assert_eq!(SortOrder::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortOrder::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortOrder::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn test_compare_text_ignores_case() {
        assert_eq!(compare_text(Some("Acme"), Some("acme")), Ordering::Equal);
        assert_eq!(compare_text(Some("acme"), Some("Beta")), Ordering::Less);
    }

    #[test]
    fn test_compare_text_orders_none_first() {
        assert_eq!(compare_text(None, Some("acme")), Ordering::Less);
        assert_eq!(compare_text(Some("acme"), None), Ordering::Greater);
        assert_eq!(compare_text(None, None), Ordering::Equal);
    }

    #[test]
    fn test_sort_by_numeric_key_ascending() {
        let invoices = create_invoices();
        let mut refs: Vec<&Invoice> = invoices.iter().collect();

        sort_items(&mut refs, |a, b| a.total.cmp(&b.total), SortOrder::Asc);

        let totals: Vec<i64> = refs.iter().map(|i| i.total).collect();
        assert_eq!(totals, vec![250, 250, 500, 750]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let invoices = create_invoices();
        let mut refs: Vec<&Invoice> = invoices.iter().collect();

        sort_items(&mut refs, |a, b| a.total.cmp(&b.total), SortOrder::Asc);

        // Invoices 2 and 4 both total 250; input order must be kept
        assert_eq!(refs[0].number, 2);
        assert_eq!(refs[1].number, 4);
    }

    #[test]
    fn test_descending_reverses_comparator_not_order() {
        let invoices = create_invoices();
        let mut refs: Vec<&Invoice> = invoices.iter().collect();

        sort_items(&mut refs, |a, b| a.total.cmp(&b.total), SortOrder::Desc);

        let numbers: Vec<u32> = refs.iter().map(|i| i.number).collect();
        // Equal keys (250) keep input order 2 before 4 even when descending
        assert_eq!(numbers, vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_sort_by_text_is_case_insensitive() {
        let invoices = create_invoices();
        let mut refs: Vec<&Invoice> = invoices.iter().collect();

        sort_items(
            &mut refs,
            |a, b| compare_text(Some(&a.client), Some(&b.client)),
            SortOrder::Asc,
        );

        let clients: Vec<&str> = refs.iter().map(|i| i.client.as_str()).collect();
        // "acme" and "ACME" compare equal, so invoice 1 stays before invoice 3
        assert_eq!(clients, vec!["acme", "ACME", "Beta Corp", "delta"]);
    }

    #[test]
    fn test_sort_order_serialization() {
        assert_eq!(serde_json::to_string(&SortOrder::Asc).unwrap(), "\"asc\"");
        assert_eq!(serde_json::to_string(&SortOrder::Desc).unwrap(), "\"desc\"");
    }
}
