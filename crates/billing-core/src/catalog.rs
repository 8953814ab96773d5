//! Catalog Store
//!
//! Owns the set of billable tests. Enforces trimmed case-insensitive name
//! uniqueness, allocates monotonic ids and keeps insertion rank.

use crate::domain::{DomainError, DomainResult, TestItem};

/// The full set of available tests plus the id allocator
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<TestItem>,
    next_id: u32,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl Catalog {
    pub fn new(items: Vec<TestItem>, next_id: u32) -> Self {
        Self { items, next_id }
    }

    pub fn items(&self) -> &[TestItem] {
        &self.items
    }

    /// Next id the allocator will hand out. Only ever increases.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn find(&self, id: u32) -> Option<&TestItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Check for a case-insensitive trimmed name collision.
    ///
    /// `exclude` skips the item being edited, so saving an item under its
    /// own name is not a conflict.
    pub fn is_duplicate(&self, name: &str, exclude: Option<u32>) -> bool {
        let key = name.trim().to_lowercase();
        self.items
            .iter()
            .any(|item| Some(item.id) != exclude && item.name_key() == key)
    }

    /// Add a custom test to the end of the catalog
    pub fn add(&mut self, name: &str, price: f64) -> DomainResult<TestItem> {
        let name = validate_name(name)?;
        validate_price(price)?;
        if self.is_duplicate(&name, None) {
            return Err(DomainError::Conflict(format!(
                "test \"{name}\" already exists"
            )));
        }

        let item = TestItem::new(self.next_id, name, price, self.items.len() as u32);
        self.next_id += 1;
        self.items.push(item.clone());
        Ok(item)
    }

    /// Replace the name and price of an existing test in place, preserving
    /// its id, insertion rank and origin flag
    pub fn edit(&mut self, id: u32, name: &str, price: f64) -> DomainResult<TestItem> {
        let name = validate_name(name)?;
        validate_price(price)?;
        if self.is_duplicate(&name, Some(id)) {
            return Err(DomainError::Conflict(format!(
                "test \"{name}\" already exists"
            )));
        }

        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("no test with id {id}")))?;
        item.name = name;
        item.price = price;
        Ok(item.clone())
    }

    /// Remove a test, returning it so callers can name it in a notification
    pub fn remove(&mut self, id: u32) -> DomainResult<TestItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("no test with id {id}")))?;
        Ok(self.items.remove(index))
    }
}

fn validate_name(name: &str) -> DomainResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidInput(
            "test name must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

fn validate_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(DomainError::InvalidInput(
            "price must be a positive number".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_id_and_order() {
        let mut catalog = Catalog::new(Vec::new(), 1);
        let first = catalog.add("CBC", 300.0).unwrap();
        let second = catalog.add("ECG", 250.0).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(first.order, 0);
        assert_eq!(second.id, 2);
        assert_eq!(second.order, 1);
        assert_eq!(catalog.next_id(), 3);
        assert_eq!(catalog.items().len(), 2);
    }

    #[test]
    fn test_add_trims_stored_name() {
        let mut catalog = Catalog::new(Vec::new(), 1);
        let item = catalog.add("  Thyroid Panel  ", 800.0).unwrap();
        assert_eq!(item.name, "Thyroid Panel");
    }

    #[test]
    fn test_add_rejects_case_insensitive_duplicate() {
        let mut catalog = Catalog::new(Vec::new(), 1);
        catalog.add("CBC", 300.0).unwrap();

        let err = catalog.add("  cbc ", 200.0).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(catalog.items().len(), 1);
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let mut catalog = Catalog::new(Vec::new(), 1);
        assert!(matches!(
            catalog.add("   ", 100.0),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            catalog.add("CBC", 0.0),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            catalog.add("CBC", -5.0),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            catalog.add("CBC", f64::NAN),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(catalog.items().is_empty());
    }

    #[test]
    fn test_edit_preserves_identity_and_allows_own_name() {
        let mut catalog = Catalog::new(Vec::new(), 1);
        let item = catalog.add("CBC", 300.0).unwrap();

        let edited = catalog.edit(item.id, "CBC", 350.0).unwrap();
        assert_eq!(edited.id, item.id);
        assert_eq!(edited.order, item.order);
        assert_eq!(edited.price, 350.0);

        catalog.add("ECG", 250.0).unwrap();
        let err = catalog.edit(item.id, "ecg", 350.0).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn test_edit_missing_id_is_not_found() {
        let mut catalog = Catalog::new(Vec::new(), 1);
        assert!(matches!(
            catalog.edit(42, "CBC", 300.0),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn test_remove_never_reuses_ids() {
        let mut catalog = Catalog::new(Vec::new(), 1);
        let first = catalog.add("CBC", 300.0).unwrap();
        catalog.remove(first.id).unwrap();

        let next = catalog.add("ECG", 250.0).unwrap();
        assert_eq!(next.id, 2);
        assert!(matches!(
            catalog.remove(first.id),
            Err(DomainError::NotFound(_))
        ));
    }
}
