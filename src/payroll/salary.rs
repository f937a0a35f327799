//! Per-employee salary calculation.
//!
//! This module computes a single employee's salary for a pay period:
//! the base salary prorated over net paid days, plus allowance totals,
//! minus deduction totals.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Adjustment, Employee};

use super::calendar::net_paid_days;

/// The attendance figures a salary run is prorated over.
///
/// `working_days` is the gross scheduled working days in the period;
/// `leave_days` is subtracted from it to obtain net paid days. `total_days`
/// is the calendar length of the billing month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attendance {
    /// Gross scheduled working days in the period.
    pub working_days: u32,
    /// Calendar days in the billing month. Must be positive.
    pub total_days: u32,
    /// Leave days taken within the period.
    pub leave_days: u32,
}

/// The result of a salary calculation, broken into its components.
///
/// All monetary fields carry full decimal precision; callers that persist
/// records round at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryBreakdown {
    /// Base salary divided by the calendar days in the month.
    pub per_day_rate: Decimal,
    /// Working days minus leave days. May be negative.
    pub net_paid_days: i64,
    /// Per-day rate multiplied by net paid days.
    pub prorated_base: Decimal,
    /// Sum of all allowances, including any ad-hoc extra.
    pub total_allowances: Decimal,
    /// Sum of all deductions, including any ad-hoc extra.
    pub total_deductions: Decimal,
    /// `prorated_base + total_allowances - total_deductions`. May be negative.
    pub net_salary: Decimal,
}

/// Sums a list of adjustments against a base salary.
///
/// Fixed adjustments contribute their amount; percentage adjustments
/// contribute `amount / 100` of the base.
///
/// # Examples
///
/// ```
/// use books_engine::models::{Adjustment, AdjustmentKind};
/// use books_engine::payroll::adjustment_total;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let adjustments = vec![
///     Adjustment {
///         id: "transport".to_string(),
///         name: "Transport Allowance".to_string(),
///         amount: Decimal::from_str("20000").unwrap(),
///         kind: AdjustmentKind::Fixed,
///     },
///     Adjustment {
///         id: "housing".to_string(),
///         name: "Housing Allowance".to_string(),
///         amount: Decimal::from_str("10").unwrap(),
///         kind: AdjustmentKind::Percentage,
///     },
/// ];
/// let base = Decimal::from_str("80000").unwrap();
/// assert_eq!(adjustment_total(&adjustments, base), Decimal::from_str("28000").unwrap());
/// ```
pub fn adjustment_total(adjustments: &[Adjustment], base_salary: Decimal) -> Decimal {
    adjustments
        .iter()
        .map(|adjustment| adjustment.value_against(base_salary))
        .sum()
}

/// Calculates an employee's salary for a pay period.
///
/// The base salary is prorated over net paid days
/// (`working_days - leave_days`) at a per-day rate of
/// `base_salary / total_days`, then the employee's allowances plus
/// `extra_allowance` are added and the employee's deductions plus
/// `extra_deduction` subtracted.
///
/// # Arguments
///
/// * `employee` - The employee whose base salary and adjustments apply
/// * `attendance` - Working days, total days, and leave days for the period
/// * `extra_allowance` - Ad-hoc allowance for this run only
/// * `extra_deduction` - Ad-hoc deduction for this run only
///
/// # Returns
///
/// A [`SalaryBreakdown`] on success, or `InvalidPeriod` when
/// `attendance.total_days` is zero. A negative net salary is a valid
/// result and is returned as-is, never clamped.
///
/// # Examples
///
/// ```
/// use books_engine::models::Employee;
/// use books_engine::payroll::{Attendance, calculate_employee_salary};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Asha Rahman".to_string(),
///     base_salary: Decimal::from_str("60000").unwrap(),
///     allowances: vec![],
///     deductions: vec![],
///     join_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
///     is_active: true,
/// };
/// let attendance = Attendance { working_days: 20, total_days: 30, leave_days: 0 };
/// let breakdown =
///     calculate_employee_salary(&employee, attendance, Decimal::ZERO, Decimal::ZERO).unwrap();
/// assert_eq!(breakdown.net_salary, Decimal::from_str("40000").unwrap());
/// ```
pub fn calculate_employee_salary(
    employee: &Employee,
    attendance: Attendance,
    extra_allowance: Decimal,
    extra_deduction: Decimal,
) -> EngineResult<SalaryBreakdown> {
    if attendance.total_days == 0 {
        return Err(EngineError::InvalidPeriod {
            message: "total days must be positive, got 0".to_string(),
        });
    }

    let per_day_rate = employee.base_salary / Decimal::from(attendance.total_days);
    let paid_days = net_paid_days(attendance.working_days, attendance.leave_days);
    let prorated_base = per_day_rate * Decimal::from(paid_days);

    let total_allowances =
        adjustment_total(&employee.allowances, employee.base_salary) + extra_allowance;
    let total_deductions =
        adjustment_total(&employee.deductions, employee.base_salary) + extra_deduction;

    let net_salary = prorated_base + total_allowances - total_deductions;

    Ok(SalaryBreakdown {
        per_day_rate,
        net_paid_days: paid_days,
        prorated_base,
        total_allowances,
        total_deductions,
        net_salary,
    })
}
