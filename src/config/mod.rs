//! Configuration loading and management for the accounting engine.
//!
//! This module provides functionality to load company payroll configuration
//! from YAML files: the company profile and the catalog of standard
//! allowances and deductions that can be attached to employees.
//!
//! # Example
//!
//! ```no_run
//! use books_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/company").unwrap();
//! println!("Loaded payroll config for: {}", config.company().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AdjustmentCatalog, CompanyProfile};
