//! Item-name normalization for deduplication keys.

use super::patterns::{NON_ALNUM, WHITESPACE_RUN};

/// Turn an item name into a canonical lowercase matching key.
///
/// Every character that is not an ASCII letter, digit or space becomes a
/// space, whitespace runs collapse to one space, and the result is
/// lowercased and trimmed. Used only for matching, never shown to callers.
pub fn normalize_name(name: &str) -> String {
    let scrubbed = NON_ALNUM.replace_all(name, " ");
    let collapsed = WHITESPACE_RUN.replace_all(&scrubbed, " ");
    collapsed.to_lowercase().trim().to_string()
}
