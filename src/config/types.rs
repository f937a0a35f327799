//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::Adjustment;

/// The company profile from `company.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyProfile {
    /// The legal name of the company.
    pub name: String,
    /// ISO 4217 currency code payroll amounts are denominated in.
    pub currency: String,
}

/// The catalog of standard adjustments from `adjustments.yaml`.
///
/// These are the company-wide allowance and deduction templates that get
/// attached to employees; whether an entry adds to or subtracts from a
/// salary is determined by the list it lives in.
#[derive(Debug, Clone, Deserialize)]
pub struct AdjustmentCatalog {
    /// Standard allowances, resolvable by id.
    pub allowances: Vec<Adjustment>,
    /// Standard deductions, resolvable by id.
    pub deductions: Vec<Adjustment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AdjustmentKind;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_company_profile() {
        let yaml = r#"
name: Harborview Consulting
currency: USD
"#;
        let profile: CompanyProfile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(profile.name, "Harborview Consulting");
        assert_eq!(profile.currency, "USD");
    }

    #[test]
    fn test_deserialize_adjustment_catalog() {
        let yaml = r#"
allowances:
  - id: transport
    name: Transport Allowance
    amount: "1500.00"
    kind: fixed
deductions:
  - id: income_tax
    name: Income Tax
    amount: "10"
    kind: percentage
"#;
        let catalog: AdjustmentCatalog = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(catalog.allowances.len(), 1);
        assert_eq!(catalog.allowances[0].id, "transport");
        assert_eq!(catalog.allowances[0].kind, AdjustmentKind::Fixed);
        assert_eq!(
            catalog.allowances[0].amount,
            Decimal::from_str("1500.00").unwrap()
        );
        assert_eq!(catalog.deductions[0].kind, AdjustmentKind::Percentage);
    }
}
