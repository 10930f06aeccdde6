//! Stable digests for identity and dedup.

use sha2::{Digest, Sha256};

/// Digest an ordered tuple of string parts.
///
/// Each part is length-prefixed so `("ab", "c")` and `("a", "bc")` never collide.
pub(crate) fn digest<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update((part.len() as u64).to_be_bytes());
        hasher.update(part.as_bytes());
    }
    format!("{:x}", hasher.finalize())
}
