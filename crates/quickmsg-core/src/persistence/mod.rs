//! Persistence substrate contract.
//!
//! The substrate stores schemaless JSON payloads grouped under namespace
//! keys ([`Association`]). Each write returns an opaque [`RecordId`] that can
//! later address that single entry. Writes under different keys are not
//! transactional with each other.

mod association;
mod store;

pub use association::{Association, RecordId};
pub use store::PersistenceStore;
