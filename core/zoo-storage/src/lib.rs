//! JSON-file backed record store for the zoo service.
//!
//! The store keeps every animal in memory and mirrors the collection to a
//! single JSON document on disk, `{"animals": [...]}`, rewritten wholesale on
//! each successful create. The document is read once, at open.

mod document;
mod error;
mod store;

pub use document::AnimalDocument;
pub use error::{StorageError, StorageResult};
pub use store::AnimalStore;
