//! Content hashing for build tags.
//!
//! A composition plan is fingerprinted over its serialized form so that two
//! identical configurations produce the same build tag and any configuration
//! change produces a different one.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// A 32-byte SHA-256 content hash.
pub type ContentHash = [u8; 32];

/// Compute the SHA-256 content hash of any serializable value.
pub fn content_hash<T: Serialize>(value: &T) -> ContentHash {
    let json = serde_json::to_vec(value).expect("serialization should not fail");
    let mut hasher = Sha256::new();
    hasher.update(&json);
    hasher.finalize().into()
}

/// Format a content hash as a hex string.
pub fn hash_hex(hash: &ContentHash) -> String {
    hash.iter().map(|b| format!("{b:02x}")).collect()
}

/// The first eight hex characters of a hash, used as a build-tag suffix.
pub fn short_tag(hash: &ContentHash) -> String {
    let mut hex = hash_hex(hash);
    hex.truncate(8);
    hex
}
