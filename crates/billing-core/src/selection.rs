//! Selection Store
//!
//! The ordered list of test ids on the current bill, most recently
//! selected first.

use crate::catalog::Catalog;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    ids: Vec<u32>,
}

impl Selection {
    pub fn new(ids: Vec<u32>) -> Self {
        Self { ids }
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Deselect if present, otherwise prepend as the most recent pick
    pub fn toggle(&mut self, id: u32) {
        if let Some(index) = self.ids.iter().position(|&selected| selected == id) {
            self.ids.remove(index);
        } else {
            self.ids.insert(0, id);
        }
    }

    /// Drop `id` without disturbing the rest of the order (delete cascade)
    pub fn remove(&mut self, id: u32) {
        self.ids.retain(|&selected| selected != id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Sum of prices over selected ids present in the catalog.
    ///
    /// A dangling id prices at 0; the delete cascade keeps that state from
    /// arising through the public API.
    pub fn total(&self, catalog: &Catalog) -> f64 {
        self.ids
            .iter()
            .filter_map(|&id| catalog.find(id))
            .map(|item| item.price)
            .sum()
    }
}
