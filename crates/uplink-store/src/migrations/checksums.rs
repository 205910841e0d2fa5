//! Migration checksums
//!
//! The SHA-256 of each migration's SQL is recorded when it is applied and
//! compared on every later run, so an edited migration is caught.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of `content`
pub fn compute_checksum(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
