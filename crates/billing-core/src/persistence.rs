//! Persistence Adapter
//!
//! Loads and saves the calculator state as three independent records in
//! key/value storage. Loading is tolerant: a missing or malformed record
//! degrades to that record's default instead of failing the caller.

use serde::Deserialize;

use crate::domain::{DomainError, DomainResult, TestItem};
use crate::storage::KeyValueStorage;

/// Record key for the catalog of test items
pub const CATALOG_KEY: &str = "testOptions";
/// Record key for the ordered list of selected ids
pub const SELECTION_KEY: &str = "selectedTests";
/// Record key for the id allocator
pub const NEXT_ID_KEY: &str = "nextId";

/// State restored from storage at startup
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedState {
    pub catalog: Vec<TestItem>,
    pub selection: Vec<u32>,
    pub next_id: u32,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            catalog: Vec::new(),
            selection: Vec::new(),
            next_id: 1,
        }
    }
}

/// Stored catalog row. Records written before the `order` field existed
/// may lack it, so it deserializes as optional and is backfilled on load.
#[derive(Deserialize)]
struct StoredTest {
    id: u32,
    name: String,
    price: f64,
    #[serde(rename = "isCustom", default)]
    is_custom: bool,
    #[serde(default)]
    order: Option<u32>,
}

/// Restore the persisted state, substituting defaults for any record that
/// is missing or unreadable.
pub fn load<S: KeyValueStorage>(storage: &S) -> PersistedState {
    let catalog = read_record(storage, CATALOG_KEY)
        .and_then(|raw| decode::<Vec<StoredTest>>(CATALOG_KEY, &raw))
        .map(restore_catalog)
        .unwrap_or_default();

    let selection = read_record(storage, SELECTION_KEY)
        .and_then(|raw| decode::<Vec<u32>>(SELECTION_KEY, &raw))
        .unwrap_or_default();

    let next_id = read_record(storage, NEXT_ID_KEY)
        .and_then(|raw| parse_next_id(&raw))
        .unwrap_or(1);

    PersistedState {
        catalog,
        selection,
        next_id,
    }
}

/// Serialize and write all three records.
///
/// The caller decides how to report a failure; in-memory state is never
/// rolled back on a failed write.
pub fn save<S: KeyValueStorage>(
    storage: &S,
    catalog: &[TestItem],
    selection: &[u32],
    next_id: u32,
) -> DomainResult<()> {
    let catalog_json =
        serde_json::to_string(catalog).map_err(|err| DomainError::Storage(err.to_string()))?;
    let selection_json =
        serde_json::to_string(selection).map_err(|err| DomainError::Storage(err.to_string()))?;

    storage.set(CATALOG_KEY, &catalog_json)?;
    storage.set(SELECTION_KEY, &selection_json)?;
    storage.set(NEXT_ID_KEY, &next_id.to_string())?;
    Ok(())
}

fn read_record<S: KeyValueStorage>(storage: &S, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("failed to read {key} from storage: {err}");
            None
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(key: &str, raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("discarding malformed {key} record: {err}");
            None
        }
    }
}

fn parse_next_id(raw: &str) -> Option<u32> {
    match raw.trim().parse() {
        Ok(next_id) => Some(next_id),
        Err(err) => {
            log::warn!("discarding malformed {NEXT_ID_KEY} record: {err}");
            None
        }
    }
}

fn restore_catalog(rows: Vec<StoredTest>) -> Vec<TestItem> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| TestItem {
            id: row.id,
            name: row.name,
            price: row.price,
            is_custom: row.is_custom,
            order: row.order.unwrap_or(index as u32),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn sample_catalog() -> Vec<TestItem> {
        vec![
            TestItem::new(1, "CBC".to_string(), 300.0, 0),
            TestItem::new(2, "Lipid Profile".to_string(), 550.0, 1),
        ]
    }

    #[test]
    fn test_empty_storage_yields_defaults() {
        let storage = MemoryStorage::new();
        let state = load(&storage);
        assert_eq!(state, PersistedState::default());
        assert_eq!(state.next_id, 1);
    }

    #[test]
    fn test_save_load_round_trip() {
        let storage = MemoryStorage::new();
        let catalog = sample_catalog();
        save(&storage, &catalog, &[2, 1], 3).unwrap();

        let state = load(&storage);
        assert_eq!(state.catalog, catalog);
        assert_eq!(state.selection, vec![2, 1]);
        assert_eq!(state.next_id, 3);
    }

    #[test]
    fn test_malformed_record_degrades_alone() {
        let storage = MemoryStorage::new();
        save(&storage, &sample_catalog(), &[1], 3).unwrap();
        storage.set(SELECTION_KEY, "not json").unwrap();

        let state = load(&storage);
        assert_eq!(state.catalog.len(), 2);
        assert!(state.selection.is_empty());
        assert_eq!(state.next_id, 3);
    }

    #[test]
    fn test_garbage_next_id_defaults_to_one() {
        let storage = MemoryStorage::new();
        storage.set(NEXT_ID_KEY, "eleven").unwrap();
        assert_eq!(load(&storage).next_id, 1);
    }

    #[test]
    fn test_missing_order_backfills_by_index() {
        let storage = MemoryStorage::new();
        storage
            .set(
                CATALOG_KEY,
                r#"[{"id":7,"name":"ECG","price":250,"isCustom":true},
                    {"id":9,"name":"X-Ray","price":400,"isCustom":true,"order":5}]"#,
            )
            .unwrap();

        let state = load(&storage);
        assert_eq!(state.catalog[0].order, 0);
        assert_eq!(state.catalog[1].order, 5);
    }
}
