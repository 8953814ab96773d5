//! Sort Mode
//!
//! Display ordering selected by the user for the projected catalog.

use serde::{Deserialize, Serialize};

/// How the displayed list is ordered within each partition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Insertion order
    #[default]
    Default,
    /// Lexicographic by name
    Name,
    /// Ascending by price
    Price,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::Name => "name",
            SortMode::Price => "price",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "name" => SortMode::Name,
            "price" => SortMode::Price,
            _ => SortMode::Default,
        }
    }
}
