//! Password hashing and verification
//!
//! Stored digests use SHA-256 with a random per-password salt and
//! constant-time comparison to prevent timing attacks.

use rand::RngCore;
use sha2::{Digest, Sha256};

const SALT_LEN: usize = 16;

/// Hash a plaintext password for storage.
///
/// The stored digest format is `hex(salt):hex(sha256(password || salt))`.
pub fn hash_password(plaintext: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);

    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hasher.update(salt);
    let digest = hasher.finalize();

    format!("{}:{}", hex::encode(salt), hex::encode(digest))
}

/// Verify a plaintext password against a stored digest.
///
/// Mismatched credentials and malformed stored digests both verify as
/// false; verification failure is a boolean, never an error.
pub fn verify_password(plaintext: &str, stored_digest: &str) -> bool {
    // Parse stored digest: salt:hash
    let Some((salt_hex, hash_hex)) = stored_digest.split_once(':') else {
        return false;
    };

    let salt = match hex::decode(salt_hex) {
        Ok(salt) => salt,
        Err(_) => return false,
    };

    let hash = match hex::decode(hash_hex) {
        Ok(hash) => hash,
        Err(_) => return false,
    };

    // Compute hash of candidate password with stored salt
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hasher.update(&salt);
    let candidate_hash = hasher.finalize();

    // Constant-time comparison to prevent timing attacks
    if hash.len() != candidate_hash.len() {
        return false;
    }

    let mut result = 0u8;
    for (a, b) in hash.iter().zip(candidate_hash.iter()) {
        result |= a ^ b;
    }
    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_roundtrip() {
        let digest = hash_password("correct horse battery staple");
        assert!(verify_password("correct horse battery staple", &digest));
    }

    #[test]
    fn test_verify_wrong_password() {
        let digest = hash_password("correct horse battery staple");
        assert!(!verify_password("Tr0ub4dor&3", &digest));
    }

    #[test]
    fn test_hashes_are_salted() {
        // Same plaintext, different digests: the salt is random per hash,
        // but both still verify.
        let a = hash_password("password123");
        let b = hash_password("password123");
        assert_ne!(a, b);
        assert!(verify_password("password123", &a));
        assert!(verify_password("password123", &b));
    }

    #[test]
    fn test_verify_malformed_digest_no_colon() {
        assert!(!verify_password("password", "nocolonshere"));
    }

    #[test]
    fn test_verify_malformed_digest_invalid_hex_salt() {
        assert!(!verify_password("password", "zzzz:abcd"));
    }

    #[test]
    fn test_verify_malformed_digest_invalid_hex_hash() {
        assert!(!verify_password("password", "abcd:zzzz"));
    }

    #[test]
    fn test_empty_password() {
        let digest = hash_password("");
        assert!(verify_password("", &digest));
        assert!(!verify_password("notempty", &digest));
    }
}
