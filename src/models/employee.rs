//! Employee model and related types.
//!
//! This module defines the Employee struct and the Adjustment types used to
//! represent the configurable allowances and deductions on a salary.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents how an adjustment amount is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    /// An absolute currency amount.
    Fixed,
    /// A percentage of the employee's base salary.
    Percentage,
}

/// A named salary adjustment, either an allowance or a deduction.
///
/// A `fixed` adjustment contributes its amount directly; a `percentage`
/// adjustment contributes `amount / 100` of the employee's base salary.
/// Amounts are non-negative; whether an adjustment adds to or subtracts from
/// the salary is determined by the list it lives in on the employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    /// Unique identifier for the adjustment.
    pub id: String,
    /// Human-readable name (e.g., "Transport Allowance").
    pub name: String,
    /// The amount: currency units for `Fixed`, percentage points for
    /// `Percentage`. Conventionally within [0, 100] for percentages, though
    /// larger values are admitted.
    pub amount: Decimal,
    /// How the amount is interpreted.
    pub kind: AdjustmentKind,
}

impl Adjustment {
    /// Returns the monetary value of this adjustment against a base salary.
    ///
    /// # Examples
    ///
    /// ```
    /// use books_engine::models::{Adjustment, AdjustmentKind};
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let tax = Adjustment {
    ///     id: "income_tax".to_string(),
    ///     name: "Income Tax".to_string(),
    ///     amount: Decimal::from_str("10").unwrap(),
    ///     kind: AdjustmentKind::Percentage,
    /// };
    /// let base = Decimal::from_str("80000").unwrap();
    /// assert_eq!(tax.value_against(base), Decimal::from_str("8000").unwrap());
    /// ```
    pub fn value_against(&self, base_salary: Decimal) -> Decimal {
        match self.kind {
            AdjustmentKind::Fixed => self.amount,
            AdjustmentKind::Percentage => base_salary * self.amount / Decimal::ONE_HUNDRED,
        }
    }
}

/// Represents an employee on the payroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub name: String,
    /// Monthly base salary in currency units. Must be non-negative.
    pub base_salary: Decimal,
    /// Allowances applied to every salary run for this employee.
    #[serde(default)]
    pub allowances: Vec<Adjustment>,
    /// Deductions applied to every salary run for this employee.
    #[serde(default)]
    pub deductions: Vec<Adjustment>,
    /// The date the employee joined the company.
    pub join_date: NaiveDate,
    /// Whether the employee is currently active.
    pub is_active: bool,
}
