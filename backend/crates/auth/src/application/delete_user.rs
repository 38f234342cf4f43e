//! Delete User Use Case
//!
//! Soft-deletes an account. Irreversible through the public contract;
//! the protected admin is immune regardless of caller privilege.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Delete user use case
pub struct DeleteUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> DeleteUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, user_id: &UserId) -> AuthResult<()> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .filter(User::is_active)
            .ok_or(AuthError::UserNotFound)?;

        if user.protected_admin {
            return Err(AuthError::ProtectedAdminDelete);
        }

        self.user_repo.soft_delete(user_id).await?;

        tracing::info!(user_id = %user.user_id, "User soft-deleted");

        Ok(())
    }
}
