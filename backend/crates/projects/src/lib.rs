//! Projects Backend Module
//!
//! Per-user "projects": opaque named text blobs owned by exactly one
//! user. Same Clean Architecture structure as the auth crate:
//! - `domain/` - Entity, value objects, repository trait
//! - `application/` - Use cases enforcing owner-or-admin access
//! - `infra/` - PostgreSQL repository
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Access Model
//! - Reads/updates/deletes require the owner or an admin
//! - Listing filters instead of rejecting: non-admins only ever see
//!   their own non-deleted projects
//! - Only admins may assign or transfer ownership, and only to a
//!   non-deleted user

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{ProjectError, ProjectResult};
pub use infra::postgres::PgProjectRepository;
pub use presentation::router::projects_router;
