//! Date-range filtering.

use chrono::NaiveDate;

use crate::models::DateRange;

/// A typed accessor for a date field.
///
/// Returning `None` marks the item as having no date value, which is
/// excluded whenever a range filter is active.
pub type DateField<T> = fn(&T) -> Option<NaiveDate>;

/// Filters items to those whose date falls within the range, inclusive on
/// both ends.
///
/// With no range the filter is a no-op and the input comes back unchanged.
/// A range with `from == to` keeps only items dated exactly that day.
///
/// # Examples
///
/// ```
/// use books_engine::models::DateRange;
/// use books_engine::query::filter_by_date_range;
/// use chrono::NaiveDate;
///
/// struct Expense {
///     incurred_on: NaiveDate,
/// }
///
/// let expenses = vec![
///     Expense { incurred_on: NaiveDate::from_ymd_opt(2026, 3, 5).unwrap() },
///     Expense { incurred_on: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap() },
/// ];
/// let range = DateRange {
///     from: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
///     to: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
/// };
///
/// let march = filter_by_date_range(&expenses, |e| Some(e.incurred_on), Some(&range));
/// assert_eq!(march.len(), 1);
///
/// let all = filter_by_date_range(&expenses, |e| Some(e.incurred_on), None);
/// assert_eq!(all.len(), 2);
/// ```
pub fn filter_by_date_range<'a, T>(
    items: &'a [T],
    field: DateField<T>,
    range: Option<&DateRange>,
) -> Vec<&'a T> {
    match range {
        None => items.iter().collect(),
        Some(range) => items
            .iter()
            .filter(|item| field(item).is_some_and(|date| range.contains(date)))
            .collect(),
    }
}
