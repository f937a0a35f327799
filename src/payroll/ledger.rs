//! The salary ledger and bulk processing.
//!
//! This module owns the append-only collection of [`SalaryRecord`]s and the
//! processing operations that extend it. Reprocessing a period intentionally
//! appends a new record; [`PayrollLedger::latest_for_period`] reads the most
//! recent entry for a period.

use std::collections::HashMap;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, SalaryRecord, SalaryStatus};

use super::calendar::{days_in_month, working_days_in_month};
use super::salary::{Attendance, SalaryBreakdown, calculate_employee_salary};

/// Per-employee overrides for a bulk payroll run.
///
/// Any field left at its default falls back to the run-wide value:
/// `working_days` defaults to the computed working days in the month,
/// leave and the ad-hoc adjustments to zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalaryOverride {
    /// Gross working days for this employee, if different from the
    /// month's computed working days.
    pub working_days: Option<u32>,
    /// Leave days taken by this employee.
    pub leave_days: u32,
    /// Ad-hoc allowance for this run only.
    pub extra_allowance: Decimal,
    /// Ad-hoc deduction for this run only.
    pub extra_deduction: Decimal,
}

/// Why an employee id was skipped during a bulk run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The id did not resolve to any employee.
    EmployeeNotFound,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::EmployeeNotFound => write!(f, "employee not found"),
        }
    }
}

/// The outcome of one input id in a bulk payroll run.
///
/// Bulk processing reports one outcome per input id, in input order, so
/// callers can distinguish partial success from total success instead of
/// comparing output and input lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BulkOutcome {
    /// A salary record was produced and appended for this id.
    Processed(SalaryRecord),
    /// The id was skipped; no record was produced.
    Skipped {
        /// The input id that was skipped.
        employee_id: String,
        /// Why it was skipped.
        reason: SkipReason,
    },
}

impl BulkOutcome {
    /// Returns the produced record, if this outcome carries one.
    pub fn record(&self) -> Option<&SalaryRecord> {
        match self {
            BulkOutcome::Processed(record) => Some(record),
            BulkOutcome::Skipped { .. } => None,
        }
    }

    /// Returns true if a record was produced.
    pub fn is_processed(&self) -> bool {
        matches!(self, BulkOutcome::Processed(_))
    }
}

/// The append-only salary record store.
///
/// The ledger does not enforce uniqueness of (employee, month, year):
/// processing the same period twice appends two records. Use
/// [`latest_for_period`](Self::latest_for_period) to read only the most
/// recent entry for a period.
#[derive(Debug, Clone, Default)]
pub struct PayrollLedger {
    records: Vec<SalaryRecord>,
}

impl PayrollLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all records, in append order.
    pub fn records(&self) -> &[SalaryRecord] {
        &self.records
    }

    /// Processes a salary for one employee and appends the resulting record.
    ///
    /// # Arguments
    ///
    /// * `employees` - The employee collection to resolve the id against
    /// * `employee_id` - The employee to process
    /// * `month` / `year` - The pay period
    /// * `working_days` - Gross scheduled working days in the period
    /// * `leave_days` - Leave days to subtract
    ///
    /// # Returns
    ///
    /// A snapshot of the appended record, or:
    /// - `EmployeeNotFound` if the id does not resolve
    /// - `InvalidPeriod` if the month is outside 1-12
    ///
    /// Calling this twice for the same period appends two records.
    pub fn process_salary(
        &mut self,
        employees: &[Employee],
        employee_id: &str,
        month: u32,
        year: i32,
        working_days: u32,
        leave_days: u32,
    ) -> EngineResult<SalaryRecord> {
        let total_days = days_in_month(month, year)?;
        let employee = find_employee(employees, employee_id)?;

        let attendance = Attendance {
            working_days,
            total_days,
            leave_days,
        };
        let breakdown =
            calculate_employee_salary(employee, attendance, Decimal::ZERO, Decimal::ZERO)?;

        let record = build_record(employee, month, year, working_days, leave_days, &breakdown);
        info!(
            employee_id = %employee.id,
            month,
            year,
            net_salary = %record.net_salary,
            "processed salary"
        );
        self.records.push(record.clone());
        Ok(record)
    }

    /// Processes salaries for a batch of employees and appends the resulting
    /// records in one batch.
    ///
    /// Per-employee figures come from `overrides`; ids without an entry use
    /// the month's computed working days, zero leave, and no ad-hoc
    /// adjustments. Ids that do not resolve to an employee are reported as
    /// [`BulkOutcome::Skipped`] rather than failing the run.
    ///
    /// # Returns
    ///
    /// One [`BulkOutcome`] per input id, in input order, or `InvalidPeriod`
    /// if the month is outside 1-12.
    pub fn process_bulk(
        &mut self,
        employees: &[Employee],
        employee_ids: &[String],
        month: u32,
        year: i32,
        overrides: &HashMap<String, SalaryOverride>,
    ) -> EngineResult<Vec<BulkOutcome>> {
        let total_days = days_in_month(month, year)?;
        let default_working_days = working_days_in_month(month, year)?;

        let fallback = SalaryOverride::default();
        let mut outcomes = Vec::with_capacity(employee_ids.len());
        let mut batch = Vec::new();

        for employee_id in employee_ids {
            let Some(employee) = employees.iter().find(|e| &e.id == employee_id) else {
                warn!(employee_id = %employee_id, "skipping unknown employee in bulk run");
                outcomes.push(BulkOutcome::Skipped {
                    employee_id: employee_id.clone(),
                    reason: SkipReason::EmployeeNotFound,
                });
                continue;
            };

            let salary_override = overrides.get(employee_id).unwrap_or(&fallback);
            let working_days = salary_override.working_days.unwrap_or(default_working_days);
            let attendance = Attendance {
                working_days,
                total_days,
                leave_days: salary_override.leave_days,
            };

            let breakdown = calculate_employee_salary(
                employee,
                attendance,
                salary_override.extra_allowance,
                salary_override.extra_deduction,
            )?;

            let record = build_record(
                employee,
                month,
                year,
                working_days,
                salary_override.leave_days,
                &breakdown,
            );
            batch.push(record.clone());
            outcomes.push(BulkOutcome::Processed(record));
        }

        info!(
            appended = batch.len(),
            skipped = outcomes.len() - batch.len(),
            month,
            year,
            "bulk payroll run complete"
        );
        self.records.extend(batch);
        Ok(outcomes)
    }

    /// Returns all records for the given month and year, in append order.
    pub fn salaries_for_month(&self, month: u32, year: i32) -> Vec<&SalaryRecord> {
        self.records
            .iter()
            .filter(|record| record.is_for_period(month, year))
            .collect()
    }

    /// Returns the most recently appended record for an employee and period.
    pub fn latest_for_period(
        &self,
        employee_id: &str,
        month: u32,
        year: i32,
    ) -> Option<&SalaryRecord> {
        self.records
            .iter()
            .rev()
            .find(|record| record.employee_id == employee_id && record.is_for_period(month, year))
    }
}

fn find_employee<'a>(employees: &'a [Employee], id: &str) -> EngineResult<&'a Employee> {
    employees
        .iter()
        .find(|employee| employee.id == id)
        .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
}

/// Builds a record from a breakdown, rounding monetary totals to cents.
fn build_record(
    employee: &Employee,
    month: u32,
    year: i32,
    working_days: u32,
    leave_days: u32,
    breakdown: &SalaryBreakdown,
) -> SalaryRecord {
    SalaryRecord {
        id: Uuid::new_v4(),
        employee_id: employee.id.clone(),
        month,
        year,
        base_salary: employee.base_salary,
        allowances: breakdown.total_allowances.round_dp(2),
        deductions: breakdown.total_deductions.round_dp(2),
        working_days,
        leave_days,
        net_salary: breakdown.net_salary.round_dp(2),
        status: SalaryStatus::Processed,
        payment: None,
        processed_at: Utc::now(),
    }
}
