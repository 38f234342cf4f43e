//! Bootstrap Use Case
//!
//! Guarantees exactly one protected admin account exists. Runs once at
//! process startup, before the service accepts traffic; any failure
//! here must abort startup.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Username of the bootstrap admin account
pub const BOOTSTRAP_ADMIN_NAME: &str = "admin";

/// Fallback email when none is configured
const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";

/// Minimum length of a generated bootstrap password
const GENERATED_PASSWORD_MIN_LENGTH: usize = 12;

/// What bootstrap did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// A protected admin already existed; nothing was changed
    AlreadyProvisioned,
    /// The protected admin was created
    Created {
        /// True when the password was generated (and logged once)
        generated_password: bool,
    },
}

/// Bootstrap use case
pub struct BootstrapUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> BootstrapUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Ensure the protected admin exists.
    ///
    /// Idempotent across restarts: a second run finds the existing
    /// protected admin and does nothing. A configured password shorter
    /// than the minimum is a hard error and no user is created.
    pub async fn execute(&self) -> AuthResult<BootstrapOutcome> {
        if self.user_repo.find_protected_admin().await?.is_some() {
            tracing::debug!("Protected admin already provisioned");
            return Ok(BootstrapOutcome::AlreadyProvisioned);
        }

        let min = self.config.min_password_length;

        let configured = self.config.bootstrap_admin_password.trim();
        let (password, generated) = if configured.is_empty() {
            (
                platform::crypto::generate_password(min.max(GENERATED_PASSWORD_MIN_LENGTH)),
                true,
            )
        } else {
            (configured.to_string(), false)
        };

        if password.chars().count() < min {
            return Err(AuthError::PasswordTooShort { min });
        }

        let email_raw = self.config.bootstrap_admin_email.trim();
        let email = Email::new(if email_raw.is_empty() {
            DEFAULT_ADMIN_EMAIL
        } else {
            email_raw
        })?;

        let user_name = UserName::new(BOOTSTRAP_ADMIN_NAME)?;

        // Length was validated above; the platform policy must not
        // reject a configured password on other grounds here either,
        // so hash the exact configured value.
        let raw = RawPassword::unchecked(password.clone());
        let password_hash = UserPassword::from_raw(&raw)?;

        let user = User::new_protected_admin(user_name, email, password_hash);
        self.user_repo.create(&user).await?;

        if generated {
            // The only moment this plaintext exists outside memory; it
            // cannot be retrieved afterwards.
            tracing::warn!(
                user_name = %user.user_name,
                password = %password,
                "Generated bootstrap admin password; store it now, it will not be shown again"
            );
        }

        tracing::info!(user_id = %user.user_id, "Bootstrap admin created");

        Ok(BootstrapOutcome::Created {
            generated_password: generated,
        })
    }
}
