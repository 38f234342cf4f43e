//! HTTP Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Form, Json};
use std::sync::Arc;
use uuid::Uuid;

use platform::token::TokenCodec;

use crate::application::config::AuthConfig;
use crate::application::{
    CreateUserInput, CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase,
    LoginInput, LoginUseCase, Principal, UpdateUserInput, UpdateUserUseCase,
};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;
use crate::presentation::dto::{
    CreateUserRequest, LoginForm, MeResponse, TokenResponse, UpdateUserRequest, UserResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub codec: Arc<TokenCodec>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<LoginForm>,
) -> AuthResult<Json<TokenResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.codec.clone());

    let output = use_case
        .execute(LoginInput {
            username: form.username,
            password: form.password,
        })
        .await?;

    Ok(Json(TokenResponse::bearer(output.access_token)))
}

// ============================================================================
// Current user
// ============================================================================

/// GET /me
pub async fn me(Extension(principal): Extension<Principal>) -> Json<MeResponse> {
    Json(MeResponse::from(&principal.user))
}

// ============================================================================
// User administration (admin only)
// ============================================================================

/// GET /users
pub async fn list_users<R>(
    State(state): State<AuthAppState<R>>,
    Extension(principal): Extension<Principal>,
) -> AuthResult<Json<Vec<UserResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    principal.require_admin()?;

    let users = ListUsersUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// GET /users/{user_id}
pub async fn get_user<R>(
    State(state): State<AuthAppState<R>>,
    Extension(principal): Extension<Principal>,
    Path(user_id): Path<Uuid>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    principal.require_admin()?;

    let user = GetUserUseCase::new(state.repo.clone())
        .execute(&UserId::from_uuid(user_id))
        .await?;

    Ok(Json(UserResponse::from(&user)))
}

/// POST /users
pub async fn create_user<R>(
    State(state): State<AuthAppState<R>>,
    Extension(principal): Extension<Principal>,
    Json(req): Json<CreateUserRequest>,
) -> AuthResult<(StatusCode, Json<UserResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    principal.require_admin()?;

    let use_case = CreateUserUseCase::new(state.repo.clone(), state.config.clone());

    let user = use_case
        .execute(CreateUserInput {
            username: req.username,
            email: req.email,
            password: req.password,
            admin: req.admin,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// PATCH /users/{user_id}
pub async fn update_user<R>(
    State(state): State<AuthAppState<R>>,
    Extension(principal): Extension<Principal>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    principal.require_admin()?;

    let use_case = UpdateUserUseCase::new(state.repo.clone(), state.config.clone());

    let user = use_case
        .execute(
            &UserId::from_uuid(user_id),
            UpdateUserInput {
                username: req.username,
                email: req.email,
                password: req.password,
                admin: req.admin,
            },
        )
        .await?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /users/{user_id}
pub async fn delete_user<R>(
    State(state): State<AuthAppState<R>>,
    Extension(principal): Extension<Principal>,
    Path(user_id): Path<Uuid>,
) -> AuthResult<StatusCode>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    principal.require_admin()?;

    DeleteUserUseCase::new(state.repo.clone())
        .execute(&UserId::from_uuid(user_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
