use sha2::{Digest, Sha256};

/// Computes a lowercase hex SHA-256 of `content`.
///
/// Reports carry these fingerprints so that callers can confirm which version
/// of the target a run saw and which version it left behind.
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
