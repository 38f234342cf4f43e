//! Projects Router
//!
//! All project routes sit behind the auth crate's bearer-token guard;
//! handlers receive the resolved principal from request extensions.

use axum::middleware::from_fn_with_state;
use axum::{Router, routing::get};
use std::sync::Arc;

use auth::PgUserRepository;
use auth::domain::repository::UserRepository;
use auth::middleware::{AuthMiddlewareState, require_auth};
use platform::token::TokenCodec;

use crate::domain::repository::ProjectRepository;
use crate::infra::postgres::PgProjectRepository;
use crate::presentation::handlers::{self, ProjectAppState};

/// Create the projects router with the PostgreSQL repositories
pub fn projects_router(
    project_repo: PgProjectRepository,
    user_repo: PgUserRepository,
    codec: Arc<TokenCodec>,
) -> Router {
    projects_router_generic(project_repo, user_repo, codec)
}

/// Create a generic projects router for any repository implementations
pub fn projects_router_generic<P, U>(
    project_repo: P,
    user_repo: U,
    codec: Arc<TokenCodec>,
) -> Router
where
    P: ProjectRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let users = Arc::new(user_repo);

    let state = ProjectAppState {
        projects: Arc::new(project_repo),
        users: users.clone(),
    };

    let guard = AuthMiddlewareState { repo: users, codec };

    Router::new()
        .route(
            "/projects",
            get(handlers::list_projects::<P, U>).post(handlers::create_project::<P, U>),
        )
        .route(
            "/projects/{project_id}",
            get(handlers::get_project::<P, U>)
                .patch(handlers::update_project::<P, U>)
                .delete(handlers::delete_project::<P, U>),
        )
        .route_layer(from_fn_with_state(guard, require_auth::<U>))
        .with_state(state)
}
