//! Auth (Authentication & Accounts) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Login with username + password, issuing stateless bearer tokens
//! - Request authentication (token -> principal) with sliding renewal
//! - Admin-gated user directory CRUD with soft deletion
//! - Bootstrap of a single protected admin account at startup
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, salted per hash
//! - Tokens are self-contained signed assertions; no session store
//! - All credential failures collapse into one opaque 401
//! - The bootstrap admin can never be downgraded or deleted

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::authenticate::Principal;
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
