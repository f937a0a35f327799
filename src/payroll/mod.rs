//! Payroll calculation logic for the accounting engine.
//!
//! This module contains the calendar arithmetic for pay periods (days and
//! working days in a month, net paid days), the per-employee salary
//! calculation with allowances and deductions, and the append-only salary
//! ledger with single and bulk processing.

mod calendar;
mod ledger;
mod salary;

pub use calendar::{days_in_month, net_paid_days, working_days_in_month};
pub use ledger::{BulkOutcome, PayrollLedger, SalaryOverride, SkipReason};
pub use salary::{Attendance, SalaryBreakdown, adjustment_total, calculate_employee_salary};
