//! Posting identifiers.
//!
//! Feeds are inconsistent about ids: some send one, some only a posting url,
//! some neither. Derivation order is explicit id → url digest → fresh token,
//! so re-fetching the same feed keeps ids stable whenever the feed allows it.

use sha2::{Digest, Sha256};
use ulid::Ulid;

/// Stable id derived from a posting's source url: SHA-256, first 16 hex
/// chars. The same url yields the same id on every fetch.
pub fn url_digest_id(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.trim().as_bytes());
    let bytes = hasher.finalize();
    let mut hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    hex.truncate(16);
    hex
}

/// Fresh unique token for postings with neither id nor url. ULIDs are
/// time-ordered and URL-safe.
pub fn synthesized_id() -> String {
    Ulid::new().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_digest_is_stable_and_short() {
        let a = url_digest_id("https://example.com/jobs/42");
        let b = url_digest_id("https://example.com/jobs/42");
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn url_digest_ignores_surrounding_whitespace() {
        assert_eq!(
            url_digest_id("https://example.com/jobs/42"),
            url_digest_id("  https://example.com/jobs/42  ")
        );
    }

    #[test]
    fn different_urls_get_different_ids() {
        assert_ne!(
            url_digest_id("https://example.com/jobs/1"),
            url_digest_id("https://example.com/jobs/2")
        );
    }

    #[test]
    fn synthesized_ids_are_unique_ulids() {
        let a = synthesized_id();
        let b = synthesized_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 26);
    }
}
