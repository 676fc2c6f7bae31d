//! Quick Message domain models.
//!
//! A quick message is a short named text template scoped to a workspace.
//! Users store it once and later recall it into the room by its id.

mod identifier;
mod model;

pub use identifier::{GLOBAL_INDEX_KEY, is_reserved_id, is_valid_id};
pub use model::QuickMessage;
