//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{
    AuthMiddlewareState, REFRESH_TOKEN_HEADER, RenewalState, refresh_token_layer, require_auth,
};
pub use router::{auth_router, auth_router_generic};
