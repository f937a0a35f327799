//! Calculation core for a small-business accounting application.
//!
//! This crate provides the payroll engine (prorated salary calculation with
//! allowances and deductions, single and bulk processing over an append-only
//! salary ledger), a generic query engine (search, date filtering, sorting,
//! pagination) shared by the application's list views, and the form validation
//! helpers backing its input forms.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod payroll;
pub mod query;
pub mod validation;
