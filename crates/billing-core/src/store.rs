//! Billing Store
//!
//! The single controller owning catalog, selection and the storage handle.
//! State is loaded once at construction; every mutation persists before
//! returning to the caller.

use crate::catalog::Catalog;
use crate::domain::{DomainResult, TestItem};
use crate::persistence;
use crate::selection::Selection;
use crate::storage::KeyValueStorage;

#[derive(Debug)]
pub struct BillingStore<S> {
    storage: S,
    catalog: Catalog,
    selection: Selection,
}

impl<S: KeyValueStorage> BillingStore<S> {
    /// Restore persisted state, degrading to an empty calculator when
    /// records are missing or unreadable.
    pub fn load(storage: S) -> Self {
        let state = persistence::load(&storage);
        Self {
            catalog: Catalog::new(state.catalog, state.next_id),
            selection: Selection::new(state.selection),
            storage,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Tests on the current bill, most recently selected first
    pub fn selected_tests(&self) -> Vec<TestItem> {
        self.selection
            .ids()
            .iter()
            .filter_map(|&id| self.catalog.find(id))
            .cloned()
            .collect()
    }

    pub fn total(&self) -> f64 {
        self.selection.total(&self.catalog)
    }

    pub fn add_test(&mut self, name: &str, price: f64) -> DomainResult<TestItem> {
        let item = self.catalog.add(name, price)?;
        self.persist();
        Ok(item)
    }

    pub fn update_test(&mut self, id: u32, name: &str, price: f64) -> DomainResult<TestItem> {
        let item = self.catalog.edit(id, name, price)?;
        self.persist();
        Ok(item)
    }

    /// Delete a test and cascade it out of the selection
    pub fn remove_test(&mut self, id: u32) -> DomainResult<TestItem> {
        let item = self.catalog.remove(id)?;
        self.selection.remove(id);
        self.persist();
        Ok(item)
    }

    pub fn toggle_selected(&mut self, id: u32) {
        self.selection.toggle(id);
        self.persist();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.persist();
    }

    /// Write-through after a mutation. A failed write is reported and the
    /// in-memory state stays authoritative for the rest of the session.
    fn persist(&self) {
        if let Err(err) = persistence::save(
            &self.storage,
            self.catalog.items(),
            self.selection.ids(),
            self.catalog.next_id(),
        ) {
            log::warn!("failed to persist calculator state: {err}");
        }
    }
}
