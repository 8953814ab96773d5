//! Test Item Entity
//!
//! Represents a billable medical test in the catalog.

use serde::{Deserialize, Serialize};

/// A billable test with a user-visible name and price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestItem {
    /// Unique identifier, monotonic, never reused
    pub id: u32,
    /// Display name, trimmed, case-insensitively unique across the catalog
    pub name: String,
    /// Price in whole currency units, positive and finite
    pub price: f64,
    /// Whether the entry was created by the user rather than preloaded
    #[serde(rename = "isCustom")]
    pub is_custom: bool,
    /// Insertion rank, stable across sorting and filtering
    pub order: u32,
}

impl TestItem {
    /// Create a new custom test
    pub fn new(id: u32, name: String, price: f64, order: u32) -> Self {
        Self {
            id,
            name,
            price,
            is_custom: true,
            order,
        }
    }

    /// Case-folded trimmed name, used for uniqueness checks
    pub fn name_key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = TestItem::new(1, "CBC".to_string(), 300.0, 0);
        assert_eq!(item.id, 1);
        assert_eq!(item.name, "CBC");
        assert!(item.is_custom);
    }

    #[test]
    fn test_name_key_folds_case_and_whitespace() {
        let item = TestItem::new(2, "  Lipid Profile ".to_string(), 550.0, 1);
        assert_eq!(item.name_key(), "lipid profile");
    }

    #[test]
    fn test_wire_field_spelling() {
        let item = TestItem::new(3, "MRI".to_string(), 4200.0, 2);
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"isCustom\":true"));
    }
}
