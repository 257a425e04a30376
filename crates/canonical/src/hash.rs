//! Version-tagged hashing for normalized keys and catalog content.
//!
//! ```text
//! SHA-256(version.to_be_bytes() || 0x00 || bytes)
//! ```
//!
//! The normalizer version is part of the digest so that a catalog hashed
//! under one normalization version never collides with the same catalog
//! under another.

use sha2::{Digest, Sha256};

/// Compute the version-tagged SHA-256 digest of `bytes` as lowercase hex.
///
/// ```rust
/// use canonical::hash_canonical_bytes;
///
/// let v1 = hash_canonical_bytes(1, b"milk");
/// let v2 = hash_canonical_bytes(2, b"milk");
/// assert_eq!(v1.len(), 64);
/// assert_ne!(v1, v2);
/// ```
pub fn hash_canonical_bytes(canonical_version: u32, canonical_bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_version.to_be_bytes());
    hasher.update([0]);
    hasher.update(canonical_bytes);
    hex::encode(hasher.finalize())
}

/// Incremental variant of [`hash_canonical_bytes`] for content that is
/// produced in pieces, such as a catalog walked in key order.
pub struct CanonicalHasher {
    inner: Sha256,
}

impl CanonicalHasher {
    /// Start a digest tagged with `canonical_version`.
    pub fn new(canonical_version: u32) -> Self {
        let mut inner = Sha256::new();
        inner.update(canonical_version.to_be_bytes());
        inner.update([0]);
        Self { inner }
    }

    /// Append `bytes` to the digest input.
    pub fn update(&mut self, bytes: &[u8]) {
        self.inner.update(bytes);
    }

    /// Consume the hasher and return the digest as lowercase hex.
    pub fn finish_hex(self) -> String {
        hex::encode(self.inner.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incremental_matches_one_shot() {
        let mut hasher = CanonicalHasher::new(1);
        hasher.update(b"chicken ");
        hasher.update(b"breast");
        assert_eq!(hasher.finish_hex(), hash_canonical_bytes(1, b"chicken breast"));
    }
}
