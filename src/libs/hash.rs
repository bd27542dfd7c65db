//! One-way password digests for profile protection.
//!
//! Profiles store the SHA-256 hex digest of their password, never the
//! plaintext. The digest is unsalted and single-round to keep the stored
//! credential format stable; switching to a salted KDF would invalidate
//! existing rows and needs a coordinated format version bump.

use sha2::{Digest, Sha256};

/// Returns the lowercase hex SHA-256 digest of the given plaintext.
pub fn hash_password(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}

/// Compares a plaintext candidate against a stored digest.
pub fn verify_password(candidate: &str, stored_digest: &str) -> bool {
    hash_password(candidate) == stored_digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_hex_encoded_sha256() {
        // Known SHA-256 of the empty string.
        assert_eq!(
            hash_password(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn verify_accepts_matching_password() {
        let digest = hash_password("hunter2");
        assert!(verify_password("hunter2", &digest));
        assert!(!verify_password("hunter3", &digest));
    }
}
