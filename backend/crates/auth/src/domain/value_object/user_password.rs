//! User Password Value Object
//!
//! Domain wrapper over `platform::password`. `RawPassword` holds a
//! policy-checked plaintext (zeroized on drop); `UserPassword` holds
//! the Argon2id digest that is stored in the database.

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

/// Raw password from user input
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password, validated against the configured
    /// minimum length (plus the platform's fixed ceiling and
    /// character rules).
    pub fn new(raw: String, min_length: usize) -> Result<Self, PasswordPolicyError> {
        ClearTextPassword::new(raw, min_length).map(Self)
    }

    /// Create without policy validation.
    ///
    /// For login and bootstrap verification: a candidate password must
    /// be verifiable even if the policy has since tightened.
    pub fn unchecked(raw: String) -> Self {
        Self(ClearTextPassword::new_unchecked(raw))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

/// Hashed user password for database storage
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password for storage
    pub fn from_raw(raw: &RawPassword) -> Result<Self, PasswordHashError> {
        raw.inner().hash().map(Self)
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> Result<Self, PasswordHashError> {
        HashedPassword::from_phc_string(phc_string).map(Self)
    }

    /// Get PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash.
    ///
    /// Constant-time with respect to the secret; false on mismatch or
    /// malformed digest.
    pub fn verify(&self, raw: &RawPassword) -> bool {
        self.0.verify(raw.inner())
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_applies_to_new() {
        assert!(RawPassword::new("short".to_string(), 8).is_err());
        assert!(RawPassword::new("longenough1".to_string(), 8).is_ok());
    }

    #[test]
    fn test_unchecked_skips_policy() {
        // A password below any sane minimum still hashes and verifies
        let raw = RawPassword::unchecked("x".to_string());
        let hashed = UserPassword::from_raw(&raw).unwrap();
        assert!(hashed.verify(&raw));
    }

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("TestPassword123!".to_string(), 8).unwrap();
        let hashed = UserPassword::from_raw(&raw).unwrap();

        assert!(hashed.verify(&raw));

        let wrong = RawPassword::unchecked("WrongPassword123!".to_string());
        assert!(!hashed.verify(&wrong));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let raw = RawPassword::new("TestPassword123!".to_string(), 8).unwrap();
        let hashed = UserPassword::from_raw(&raw).unwrap();

        let phc = hashed.as_phc_string().to_string();
        let restored = UserPassword::from_phc_string(phc).unwrap();

        assert!(restored.verify(&raw));
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::unchecked("SecretPassword123!".to_string());
        let debug = format!("{:?}", raw);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Secret"));

        let hashed = UserPassword::from_raw(&raw).unwrap();
        let debug = format!("{:?}", hashed);
        assert!(debug.contains("HASH"));
    }
}
