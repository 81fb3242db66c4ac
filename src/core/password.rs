//! Password hashing and verification.
//!
//! Passwords are stored as Argon2 PHC strings with a random salt. A user without
//! a password gets an "unusable" marker instead: a `!` followed by random
//! characters, which never parses as a hash and therefore never verifies.

use crate::{
    entities::user,
    errors::{Error, Result},
};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Prefix marking a stored credential as unusable
pub const UNUSABLE_PASSWORD_PREFIX: char = '!';

/// Hash a password using Argon2.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| Error::PasswordHash {
            message: format!("Failed to hash password: {e}"),
        })
}

/// Builds a credential that no password will ever match.
#[must_use]
pub fn make_unusable_password() -> String {
    let suffix = SaltString::generate(&mut OsRng);
    format!("{UNUSABLE_PASSWORD_PREFIX}{}", suffix.as_str())
}

/// Whether an encoded credential can ever verify a password.
#[must_use]
pub fn is_password_usable(encoded: &str) -> bool {
    !encoded.is_empty() && !encoded.starts_with(UNUSABLE_PASSWORD_PREFIX)
}

/// Verify a password against an encoded credential.
///
/// Unusable credentials always yield `Ok(false)`.
///
/// # Errors
/// Returns `Error::PasswordHash` if a usable credential is not a valid PHC string.
pub fn verify_password(password: &str, encoded: &str) -> Result<bool> {
    if !is_password_usable(encoded) {
        return Ok(false);
    }

    let parsed_hash = PasswordHash::new(encoded).map_err(|e| Error::PasswordHash {
        message: format!("Invalid hash: {e}"),
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Something that stores a password credential.
pub trait CredentialHolder {
    /// The encoded credential as stored.
    fn password_hash(&self) -> &str;

    /// Checks a raw password against the stored credential.
    fn check_password(&self, password: &str) -> Result<bool> {
        verify_password(password, self.password_hash())
    }

    /// Whether the stored credential can ever match a password.
    fn has_usable_password(&self) -> bool {
        is_password_usable(self.password_hash())
    }
}

impl CredentialHolder for user::Model {
    fn password_hash(&self) -> &str {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("hunter22").unwrap();
        assert_ne!(hash, "hunter22");
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("hunter22", &hash).unwrap());
        assert!(!verify_password("hunter23", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("same").unwrap();
        let second = hash_password("same").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_unusable_password() {
        let marker = make_unusable_password();
        assert!(marker.starts_with(UNUSABLE_PASSWORD_PREFIX));
        assert!(marker.len() > 1);
        assert!(!is_password_usable(&marker));
        assert!(!verify_password("", &marker).unwrap());
        assert!(!verify_password(&marker, &marker).unwrap());
    }

    #[test]
    fn test_empty_credential_is_unusable() {
        assert!(!is_password_usable(""));
        assert!(!verify_password("", "").unwrap());
    }

    #[test]
    fn test_garbage_hash_is_an_error() {
        let result = verify_password("anything", "not-a-phc-string");
        assert!(matches!(result, Err(Error::PasswordHash { .. })));
    }
}
