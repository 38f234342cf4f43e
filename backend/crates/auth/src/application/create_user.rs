//! Create User Use Case
//!
//! Admin-gated account creation.

use std::sync::Arc;

use platform::password::PasswordPolicyError;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Create user input
pub struct CreateUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub admin: bool,
}

/// Create user use case
pub struct CreateUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> CreateUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: CreateUserInput) -> AuthResult<User> {
        let user_name = UserName::new(&input.username)?;
        let email = Email::new(&input.email)?;
        let raw = check_password_policy(input.password, self.config.min_password_length)?;

        // Duplicate check spans soft-deleted rows: a deleted user's
        // username or email stays reserved.
        if self
            .user_repo
            .find_by_user_name_or_email(&user_name, &email)
            .await?
            .is_some()
        {
            return Err(AuthError::UserNameOrEmailTaken);
        }

        let password_hash = UserPassword::from_raw(&raw)?;
        let user = User::new(user_name, email, password_hash, input.admin);

        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            admin = user.admin,
            "User created"
        );

        Ok(user)
    }
}

/// Validate a candidate password against the configured policy.
///
/// A too-short password keeps its dedicated error (the boundary shows
/// the configured minimum); other policy violations surface as plain
/// validation failures.
pub(crate) fn check_password_policy(
    password: String,
    min_length: usize,
) -> AuthResult<RawPassword> {
    RawPassword::new(password, min_length).map_err(|e| match e {
        PasswordPolicyError::TooShort { min, .. } => AuthError::PasswordTooShort { min },
        other => AuthError::Validation(other.to_string()),
    })
}
