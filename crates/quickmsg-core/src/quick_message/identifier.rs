//! Quick message id rules.

use once_cell::sync::Lazy;
use regex::Regex;

/// Namespace key under which every record is indexed for listing.
///
/// No user-chosen id may equal it.
pub const GLOBAL_INDEX_KEY: &str = "message_storage_manager";

static ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]+$").expect("id pattern is a valid regex"));

/// Returns true when `id` collides with the global index key.
///
/// Comparison is exact and case-sensitive.
pub fn is_reserved_id(id: &str) -> bool {
    id == GLOBAL_INDEX_KEY
}

/// Returns true when `id` only uses letters, digits and `-`.
pub fn is_valid_id(id: &str) -> bool {
    ID_PATTERN.is_match(id)
}
