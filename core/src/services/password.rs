//! Password hashing built on bcrypt.
//!
//! Cost is pinned to the library's recommended default, so every hash
//! produced by one build carries the same cost factor.

use crate::errors::{DomainError, DomainResult};

/// Hash a plaintext password with a fresh salt.
pub fn hash_password(plain: &str) -> DomainResult<String> {
    bcrypt::hash(plain, bcrypt::DEFAULT_COST).map_err(|e| DomainError::Internal {
        message: format!("password hashing failed: {}", e),
    })
}

/// Verify a plaintext candidate against a stored digest.
///
/// A non-matching password is `Ok(false)`; only a structurally invalid
/// digest is an error.
pub fn verify_password(plain: &str, digest: &str) -> DomainResult<bool> {
    bcrypt::verify(plain, digest).map_err(|e| DomainError::Internal {
        message: format!("invalid password digest: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let digest = hash_password("hunter2!").unwrap();
        assert!(verify_password("hunter2!", &digest).unwrap());
    }

    #[test]
    fn test_wrong_password_is_false_not_error() {
        let digest = hash_password("hunter2!").unwrap();
        assert!(!verify_password("wrong", &digest).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("hunter2!").unwrap();
        let second = hash_password("hunter2!").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_invalid_digest_is_error() {
        assert!(verify_password("hunter2!", "not-a-bcrypt-digest").is_err());
    }
}
