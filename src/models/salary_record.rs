//! Salary record model and related types.
//!
//! This module contains the [`SalaryRecord`] snapshot produced by a payroll
//! run, along with its status and optional payment metadata.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a salary record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryStatus {
    /// Created but not yet processed.
    Pending,
    /// Computed by a payroll run.
    Processed,
    /// Payment has been recorded against the record.
    Paid,
}

impl std::fmt::Display for SalaryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SalaryStatus::Pending => write!(f, "pending"),
            SalaryStatus::Processed => write!(f, "processed"),
            SalaryStatus::Paid => write!(f, "paid"),
        }
    }
}

/// Payment metadata recorded against a salary record by downstream
/// payment-recording flows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    /// The date the payment was made.
    pub date: NaiveDate,
    /// The payment method (e.g., "bank_transfer").
    pub method: String,
    /// An external payment reference.
    pub reference: String,
}

/// An immutable snapshot produced by the payroll engine for one
/// (employee, month, year) run.
///
/// Records are created once per processing run and never mutated in place;
/// reprocessing a period appends a new record rather than replacing the old
/// one. `base_salary` is the employee's configured base, not the prorated
/// amount; `allowances` and `deductions` are the aggregated totals applied
/// in the run.
///
/// # Example
///
/// ```
/// use books_engine::models::{SalaryRecord, SalaryStatus};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let record = SalaryRecord {
///     id: Uuid::new_v4(),
///     employee_id: "emp_001".to_string(),
///     month: 3,
///     year: 2026,
///     base_salary: Decimal::new(80000, 0),
///     allowances: Decimal::new(25000, 0),
///     deductions: Decimal::new(8000, 0),
///     working_days: 22,
///     leave_days: 2,
///     net_salary: Decimal::new(7033333, 2),
///     status: SalaryStatus::Processed,
///     payment: None,
///     processed_at: Utc::now(),
/// };
/// assert!(record.is_for_period(3, 2026));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    /// Unique identifier for this record.
    pub id: Uuid,
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar month of the pay period (1-12).
    pub month: u32,
    /// The calendar year of the pay period.
    pub year: i32,
    /// The employee's configured monthly base salary at processing time.
    pub base_salary: Decimal,
    /// Total allowances applied in this run.
    pub allowances: Decimal,
    /// Total deductions applied in this run.
    pub deductions: Decimal,
    /// Gross scheduled working days used for proration.
    pub working_days: u32,
    /// Leave days subtracted from the working days.
    pub leave_days: u32,
    /// The computed net salary. May be negative.
    pub net_salary: Decimal,
    /// Lifecycle status.
    pub status: SalaryStatus,
    /// Payment metadata, set by downstream payment flows.
    pub payment: Option<PaymentDetails>,
    /// When this record was produced.
    pub processed_at: DateTime<Utc>,
}

impl SalaryRecord {
    /// Returns true if this record covers the given month and year.
    pub fn is_for_period(&self, month: u32, year: i32) -> bool {
        self.month == month && self.year == year
    }
}
