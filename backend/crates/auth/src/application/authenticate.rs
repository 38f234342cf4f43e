//! Request Authentication Use Case
//!
//! Resolves a bearer token to the authenticated principal.

use std::sync::Arc;

use platform::token::TokenCodec;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_id::UserId, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// The authenticated identity for the duration of one request.
///
/// Derived from a verified token; never persisted. Carried in request
/// extensions and discarded when the response is sent.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user: User,
}

impl Principal {
    pub fn user_id(&self) -> &UserId {
        &self.user.user_id
    }

    pub fn user_name(&self) -> &UserName {
        &self.user.user_name
    }

    pub fn is_admin(&self) -> bool {
        self.user.admin
    }

    /// Admin-only gate, checked after authentication
    pub fn require_admin(&self) -> AuthResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AuthError::AdminRequired)
        }
    }
}

/// Request authentication use case
pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    codec: Arc<TokenCodec>,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, codec: Arc<TokenCodec>) -> Self {
        Self { user_repo, codec }
    }

    /// Verify the token and resolve its subject to a live user.
    ///
    /// All failure causes - bad signature, expiry, malformed token,
    /// unknown subject, soft-deleted user - collapse into the single
    /// opaque `Unauthenticated`.
    pub async fn execute(&self, bearer_token: &str) -> AuthResult<Principal> {
        let subject = self
            .codec
            .verify(bearer_token)
            .map_err(|_| AuthError::Unauthenticated)?;

        let user_name = UserName::new(&subject).map_err(|_| AuthError::Unauthenticated)?;

        let user = self
            .user_repo
            .find_active_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::Unauthenticated)?;

        Ok(Principal { user })
    }
}
