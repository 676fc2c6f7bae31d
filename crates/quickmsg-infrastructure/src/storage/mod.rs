//! Storage layer shared by the persistence substrates.

mod atomic_json;
mod document;

pub use atomic_json::{AtomicFileError, AtomicJsonFile};
pub use document::{StoreDocument, StoredEntry};
