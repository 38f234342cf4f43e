//! Login Use Case
//!
//! Verifies credentials and issues a bearer token.

use std::sync::Arc;

use platform::token::TokenCodec;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed bearer token, subject = username
    pub access_token: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    codec: Arc<TokenCodec>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, codec: Arc<TokenCodec>) -> Self {
        Self { user_repo, codec }
    }

    /// Check credentials and issue a token.
    ///
    /// Every failure path - unknown username, soft-deleted user,
    /// malformed username, wrong password - collapses into the same
    /// `InvalidCredentials`, so the response never reveals whether the
    /// username exists. No side effects: no last-login stamp, no
    /// attempt counter.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let user_name =
            UserName::new(&input.username).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_active_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let candidate = RawPassword::unchecked(input.password);
        if !user.password_hash.verify(&candidate) {
            return Err(AuthError::InvalidCredentials);
        }

        let access_token = self
            .codec
            .issue(user.user_name.as_str())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput { access_token })
    }
}
