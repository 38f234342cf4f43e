//! Application Configuration
//!
//! Immutable configuration for the auth application layer. Constructed
//! once at startup (from the environment, in the API binary) and passed
//! by `Arc` into use cases and routers; there is no global lookup.

use chrono::Duration;
use platform::token::{Algorithm, TokenCodec};

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Process-wide signing secret for bearer tokens
    pub token_secret: String,
    /// HMAC algorithm for token signing
    pub token_algorithm: Algorithm,
    /// Validity window of issued tokens
    pub token_ttl: Duration,
    /// Minimum password length for created/updated credentials and
    /// for the bootstrap admin password
    pub min_password_length: usize,
    /// Bootstrap admin email (falls back to a default when blank)
    pub bootstrap_admin_email: String,
    /// Bootstrap admin password; blank means generate one
    pub bootstrap_admin_password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: "change-me".to_string(),
            token_algorithm: Algorithm::HS256,
            token_ttl: Duration::minutes(30),
            min_password_length: 8,
            bootstrap_admin_email: "admin@example.com".to_string(),
            bootstrap_admin_password: String::new(),
        }
    }
}

impl AuthConfig {
    /// Build the token codec for this configuration.
    ///
    /// Called once at startup; the codec is immutable and shared.
    pub fn token_codec(&self) -> TokenCodec {
        TokenCodec::new(
            self.token_secret.as_bytes(),
            self.token_algorithm,
            self.token_ttl,
        )
    }
}
