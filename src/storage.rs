//! Browser Storage Adapter
//!
//! Implements the core key/value storage trait on top of
//! window.localStorage.

use billing_core::{DomainError, DomainResult, KeyValueStorage};
use wasm_bindgen::JsValue;

/// localStorage-backed storage handle
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }
}

fn local_storage() -> DomainResult<web_sys::Storage> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or_else(|| DomainError::Storage("localStorage is unavailable".to_string()))
}

fn js_error(err: JsValue) -> DomainError {
    DomainError::Storage(format!("{err:?}"))
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }
}
