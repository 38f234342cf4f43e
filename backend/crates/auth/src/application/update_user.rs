//! Update User Use Case
//!
//! Admin-gated partial update of an account. Each changed field is
//! validated and duplicate-checked independently; the protected admin
//! can never lose its admin flag.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::create_user::check_password_policy;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_id::UserId, user_name::UserName, user_password::UserPassword};
use crate::error::{AuthError, AuthResult};

/// Update user input; `None` leaves a field unchanged
#[derive(Default)]
pub struct UpdateUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub admin: Option<bool>,
}

/// Update user use case
pub struct UpdateUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> UpdateUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, user_id: &UserId, input: UpdateUserInput) -> AuthResult<User> {
        let mut user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .filter(User::is_active)
            .ok_or(AuthError::UserNotFound)?;

        if let Some(username) = input.username {
            let user_name = UserName::new(&username)?;
            if user_name != user.user_name {
                // Duplicate check includes soft-deleted rows
                if self.user_repo.find_by_user_name(&user_name).await?.is_some() {
                    return Err(AuthError::UserNameTaken);
                }
                user.rename(user_name);
            }
        }

        if let Some(email) = input.email {
            let email = Email::new(&email)?;
            if email != user.email {
                if self.user_repo.find_by_email(&email).await?.is_some() {
                    return Err(AuthError::EmailTaken);
                }
                user.set_email(email);
            }
        }

        if let Some(password) = input.password {
            let raw = check_password_policy(password, self.config.min_password_length)?;
            user.set_password(UserPassword::from_raw(&raw)?);
        }

        if let Some(admin) = input.admin {
            if user.protected_admin && !admin {
                return Err(AuthError::ProtectedAdminDowngrade);
            }
            user.set_admin(admin);
        }

        self.user_repo.update(&user).await?;

        tracing::info!(user_id = %user.user_id, "User updated");

        Ok(user)
    }
}
