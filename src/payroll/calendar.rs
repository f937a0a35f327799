//! Pay period calendar arithmetic.
//!
//! This module provides the day counts a payroll run is prorated over:
//! raw days in a month, working days (weekdays) in a month, and the net
//! paid days contract shared by every processing path.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};

/// Returns the first day of the given month, or `InvalidPeriod` if the
/// month is outside 1-12.
fn first_of_month(month: u32, year: i32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| EngineError::InvalidPeriod {
        message: format!("month must be between 1 and 12, got {}", month),
    })
}

/// Returns the number of calendar days in the given month.
///
/// # Arguments
///
/// * `month` - The calendar month (1-12)
/// * `year` - The calendar year
///
/// # Returns
///
/// The day count (28-31), or `InvalidPeriod` if the month is outside 1-12.
///
/// # Examples
///
/// ```
/// use books_engine::payroll::days_in_month;
///
/// assert_eq!(days_in_month(3, 2026).unwrap(), 31);
/// assert_eq!(days_in_month(2, 2024).unwrap(), 29); // leap year
/// ```
pub fn days_in_month(month: u32, year: i32) -> EngineResult<u32> {
    let first = first_of_month(month, year)?;
    let next = if month == 12 {
        first_of_month(1, year + 1)?
    } else {
        first_of_month(month + 1, year)?
    };
    Ok(next.signed_duration_since(first).num_days() as u32)
}

/// Returns the number of working days (Monday through Friday) in the
/// given month.
///
/// Public holidays are not accounted for; a working day is any weekday.
///
/// # Arguments
///
/// * `month` - The calendar month (1-12)
/// * `year` - The calendar year
///
/// # Examples
///
/// ```
/// use books_engine::payroll::working_days_in_month;
///
/// // March 2026 has 31 days, 9 of which fall on a weekend
/// assert_eq!(working_days_in_month(3, 2026).unwrap(), 22);
/// ```
pub fn working_days_in_month(month: u32, year: i32) -> EngineResult<u32> {
    let days = days_in_month(month, year)?;
    let first = first_of_month(month, year)?;
    let count = first
        .iter_days()
        .take(days as usize)
        .filter(|day| !matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
        .count();
    Ok(count as u32)
}

/// Returns the net paid days for a pay period.
///
/// `working_days` is the gross scheduled working days in the period and
/// `leave_days` is subtracted from it. The result is signed: more leave
/// than scheduled days yields a negative count, which flows through to a
/// negative prorated base rather than being clamped.
///
/// # Examples
///
/// ```
/// use books_engine::payroll::net_paid_days;
///
/// assert_eq!(net_paid_days(22, 2), 20);
/// assert_eq!(net_paid_days(22, 0), 22);
/// assert_eq!(net_paid_days(2, 5), -3);
/// ```
pub fn net_paid_days(working_days: u32, leave_days: u32) -> i64 {
    i64::from(working_days) - i64::from(leave_days)
}
