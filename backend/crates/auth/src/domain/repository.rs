//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::{email::Email, user_id::UserId, user_name::UserName};
use crate::error::AuthResult;

/// User directory repository trait.
///
/// Duplicate-check lookups (`find_by_user_name`, `find_by_email`,
/// `find_by_user_name_or_email`) match soft-deleted rows too: a
/// deleted user's username and email stay reserved forever. Only the
/// `active` variants filter on `is_deleted`.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID, whether soft-deleted or not
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find a non-deleted user by exact user name
    async fn find_active_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Find any user (soft-deleted included) by user name
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Find any user (soft-deleted included) by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Find any user (soft-deleted included) matching either user name or email
    async fn find_by_user_name_or_email(
        &self,
        user_name: &UserName,
        email: &Email,
    ) -> AuthResult<Option<User>>;

    /// Find the protected bootstrap admin, if one exists
    async fn find_protected_admin(&self) -> AuthResult<Option<User>>;

    /// List all non-deleted users
    async fn list_active(&self) -> AuthResult<Vec<User>>;

    /// Update user
    async fn update(&self, user: &User) -> AuthResult<()>;

    /// Soft-delete a user
    async fn soft_delete(&self, user_id: &UserId) -> AuthResult<()>;
}
