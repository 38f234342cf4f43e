//! Auth Router

use axum::middleware::from_fn_with_state;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use platform::token::TokenCodec;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_auth};

/// Create the auth router with the PostgreSQL repository
pub fn auth_router(
    repo: PgUserRepository,
    codec: Arc<TokenCodec>,
    config: Arc<AuthConfig>,
) -> Router {
    auth_router_generic(repo, codec, config)
}

/// Create a generic auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, codec: Arc<TokenCodec>, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let repo = Arc::new(repo);

    let state = AuthAppState {
        repo: repo.clone(),
        codec: codec.clone(),
        config,
    };

    let guard = AuthMiddlewareState { repo, codec };

    let protected = Router::new()
        .route("/me", get(handlers::me))
        .route(
            "/users",
            get(handlers::list_users::<R>).post(handlers::create_user::<R>),
        )
        .route(
            "/users/{user_id}",
            get(handlers::get_user::<R>)
                .patch(handlers::update_user::<R>)
                .delete(handlers::delete_user::<R>),
        )
        .route_layer(from_fn_with_state(guard, require_auth::<R>))
        .with_state(state.clone());

    Router::new()
        .route("/login", post(handlers::login::<R>))
        .with_state(state)
        .merge(protected)
}
