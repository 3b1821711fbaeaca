//! crates/dash_io/src/hasher.rs
//!
//! SHA-256 of the report bytes exactly as fetched. The digest is shown in the
//! page footer so a reader can match the dashboard to a published artifact.
//! Hex is lowercase.

#[cfg(feature = "hash")]
use sha2::{Digest, Sha256};

/// Lowercase 64-hex SHA-256 of `bytes`.
#[cfg(feature = "hash")]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}

/// Digest when hashing is compiled in, `None` otherwise.
pub fn digest_hex(bytes: &[u8]) -> Option<String> {
    #[cfg(feature = "hash")]
    {
        Some(sha256_hex(bytes))
    }
    #[cfg(not(feature = "hash"))]
    {
        let _ = bytes;
        None
    }
}

/// First `n` characters for display (clamped to the digest length).
pub fn short(digest: &str, n: usize) -> &str {
    match digest.char_indices().nth(n) {
        Some((end, _)) => &digest[..end],
        None => digest,
    }
}
