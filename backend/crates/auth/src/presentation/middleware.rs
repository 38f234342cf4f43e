//! Auth Middleware
//!
//! Bearer-token extraction, the authentication guard for protected
//! routes, and the sliding-renewal layer.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use platform::token::TokenCodec;

use crate::application::AuthenticateUseCase;
use crate::domain::repository::UserRepository;
use crate::error::AuthError;

/// Response header carrying a renewed bearer token
pub const REFRESH_TOKEN_HEADER: &str = "x-refresh-token";

/// State for the authentication guard
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub codec: Arc<TokenCodec>,
}

/// Extract the bearer token from the Authorization header, if any
pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Middleware that requires a valid bearer token.
///
/// On success the resolved [`Principal`](crate::Principal) is inserted
/// into request extensions for downstream handlers. Every failure,
/// including an absent header, answers with the one opaque 401.
pub async fn require_auth<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Some(token) = extract_bearer(req.headers()).map(str::to_owned) else {
        return Err(AuthError::Unauthenticated.into_response());
    };

    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.codec.clone());

    let principal = use_case
        .execute(&token)
        .await
        .map_err(IntoResponse::into_response)?;

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

/// State for the sliding-renewal layer
#[derive(Clone)]
pub struct RenewalState {
    pub codec: Arc<TokenCodec>,
}

/// Sliding-session renewal, applied to the whole application.
///
/// Whenever a request presents a bearer token that still verifies, the
/// response carries a fresh token with a full TTL window in
/// `X-Refresh-Token`. Renewal is best-effort: an invalid or expired
/// token is silently ignored and the response goes out unchanged. No
/// user lookup happens here; request authentication is the gate.
pub async fn refresh_token_layer(
    State(state): State<RenewalState>,
    req: Request,
    next: Next,
) -> Response {
    let token = extract_bearer(req.headers()).map(str::to_owned);

    let mut response = next.run(req).await;

    if let Some(token) = token {
        if let Ok(subject) = state.codec.verify(&token) {
            if let Ok(fresh) = state.codec.issue(&subject) {
                if let Ok(value) = HeaderValue::from_str(&fresh) {
                    response
                        .headers_mut()
                        .insert(HeaderName::from_static(REFRESH_TOKEN_HEADER), value);
                }
            }
        }
    }

    response
}
