//! User Entity

use crate::domain::value_object::{
    email::Email, user_id::UserId, user_name::UserName, user_password::UserPassword,
};

/// User account entity.
///
/// Soft deletion only: a user is never physically removed once it may
/// be referenced by a project, so deletion flips `is_deleted`.
/// `protected_admin` is set for exactly one account (the bootstrap
/// admin) and is immutable once true.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier, immutable
    pub user_id: UserId,
    /// Unique login/display name
    pub user_name: UserName,
    /// Unique contact address
    pub email: Email,
    /// Argon2id digest; the plaintext is never stored
    pub password_hash: UserPassword,
    /// Admin privilege flag
    pub admin: bool,
    /// True only for the bootstrap admin
    pub protected_admin: bool,
    /// Soft-delete visibility flag
    pub is_deleted: bool,
}

impl User {
    /// Create a new regular user
    pub fn new(user_name: UserName, email: Email, password_hash: UserPassword, admin: bool) -> Self {
        Self {
            user_id: UserId::new(),
            user_name,
            email,
            password_hash,
            admin,
            protected_admin: false,
            is_deleted: false,
        }
    }

    /// Create the bootstrap admin. The only constructor that sets
    /// `protected_admin`.
    pub fn new_protected_admin(user_name: UserName, email: Email, password_hash: UserPassword) -> Self {
        Self {
            protected_admin: true,
            ..Self::new(user_name, email, password_hash, true)
        }
    }

    /// Whether this account may authenticate and own resources
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }

    pub fn rename(&mut self, user_name: UserName) {
        self.user_name = user_name;
    }

    pub fn set_email(&mut self, email: Email) {
        self.email = email;
    }

    pub fn set_password(&mut self, password_hash: UserPassword) {
        self.password_hash = password_hash;
    }

    /// Set the admin flag. Callers must check the protected-admin
    /// invariant first; this mutator does not.
    pub fn set_admin(&mut self, admin: bool) {
        self.admin = admin;
    }
}
