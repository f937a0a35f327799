//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading company
//! payroll configuration from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{Adjustment, AdjustmentKind};

use super::types::{AdjustmentCatalog, CompanyProfile};

/// Loads and provides access to company payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides lookup methods for the standard adjustment catalog.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/company/
/// ├── company.yaml      # Company profile
/// └── adjustments.yaml  # Standard allowance/deduction catalog
/// ```
///
/// # Example
///
/// ```no_run
/// use books_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/company").unwrap();
///
/// let transport = loader.allowance("transport").unwrap();
/// println!("{}: {}", transport.name, transport.amount);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    company: CompanyProfile,
    catalog: AdjustmentCatalog,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/company")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either required file is missing (`ConfigNotFound`)
    /// - Either file contains invalid YAML (`ConfigParseError`)
    /// - An adjustment in the catalog carries a negative amount
    ///   (`InvalidAdjustment`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let company = Self::load_yaml::<CompanyProfile>(&path.join("company.yaml"))?;
        let catalog = Self::load_yaml::<AdjustmentCatalog>(&path.join("adjustments.yaml"))?;
        Self::validate_catalog(&catalog)?;

        debug!(
            company = %company.name,
            allowances = catalog.allowances.len(),
            deductions = catalog.deductions.len(),
            "loaded payroll configuration"
        );

        Ok(Self { company, catalog })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Rejects negative amounts; warns on percentages above 100, which are
    /// admitted but usually a data-entry mistake.
    fn validate_catalog(catalog: &AdjustmentCatalog) -> EngineResult<()> {
        for adjustment in catalog.allowances.iter().chain(catalog.deductions.iter()) {
            if adjustment.amount < Decimal::ZERO {
                return Err(EngineError::InvalidAdjustment {
                    name: adjustment.name.clone(),
                    message: format!("amount cannot be negative, got {}", adjustment.amount),
                });
            }
            if adjustment.kind == AdjustmentKind::Percentage
                && adjustment.amount > Decimal::ONE_HUNDRED
            {
                warn!(
                    adjustment = %adjustment.name,
                    amount = %adjustment.amount,
                    "percentage adjustment above 100"
                );
            }
        }
        Ok(())
    }

    /// Returns the company profile.
    pub fn company(&self) -> &CompanyProfile {
        &self.company
    }

    /// Returns the standard adjustment catalog.
    pub fn catalog(&self) -> &AdjustmentCatalog {
        &self.catalog
    }

    /// Gets a standard allowance by its id.
    ///
    /// # Returns
    ///
    /// The allowance if found, or an `AdjustmentNotFound` error.
    pub fn allowance(&self, id: &str) -> EngineResult<&Adjustment> {
        self.catalog
            .allowances
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| EngineError::AdjustmentNotFound { id: id.to_string() })
    }

    /// Gets a standard deduction by its id.
    ///
    /// # Returns
    ///
    /// The deduction if found, or an `AdjustmentNotFound` error.
    pub fn deduction(&self, id: &str) -> EngineResult<&Adjustment> {
        self.catalog
            .deductions
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| EngineError::AdjustmentNotFound { id: id.to_string() })
    }
}
