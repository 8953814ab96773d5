//! MediBill Core
//!
//! Layered architecture:
//! - domain: Core entities and error types
//! - storage: Key/value storage abstraction
//! - persistence: Load/save of the persisted records
//! - catalog / selection: The two state stores
//! - projection: The displayed-list computation
//! - intake: Raw form input validation
//! - store: The controller tying them together

mod catalog;
mod domain;
mod intake;
mod persistence;
mod projection;
mod selection;
mod storage;
mod store;


pub use catalog::Catalog;
pub use domain::{DomainError, DomainResult, SortMode, TestItem};
pub use intake::TestDraft;
pub use projection::project;
pub use selection::Selection;
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::BillingStore;
