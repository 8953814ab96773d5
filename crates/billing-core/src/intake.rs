//! Custom-Item Intake
//!
//! Validates and normalizes raw form input before it reaches the catalog.

use crate::catalog::Catalog;
use crate::domain::{DomainError, DomainResult};

/// Raw name/price text captured from the add/edit forms
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestDraft {
    pub name: String,
    pub price: String,
}

impl TestDraft {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
        }
    }

    /// Normalize the draft into a trimmed name and parsed price.
    ///
    /// Idempotent; the catalog re-validates on submission, so calling this
    /// any number of times has no effect beyond the returned value.
    pub fn validate(&self) -> DomainResult<(String, f64)> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput(
                "please enter a test name".to_string(),
            ));
        }

        let price: f64 = self.price.trim().parse().map_err(|_| {
            DomainError::InvalidInput("please enter a valid price".to_string())
        })?;
        if !price.is_finite() || price <= 0.0 {
            return Err(DomainError::InvalidInput(
                "price must be greater than zero".to_string(),
            ));
        }

        Ok((name.to_string(), price))
    }

    /// Live duplicate pre-check, for immediate form feedback while typing
    pub fn duplicates_existing(&self, catalog: &Catalog) -> bool {
        let name = self.name.trim();
        !name.is_empty() && catalog.is_duplicate(name, None)
    }
}
