//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors flow through
//! `kernel::error::AppError` and the feature-crate error enums.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use auth::application::BootstrapUseCase;
use auth::middleware::{REFRESH_TOKEN_HEADER, RenewalState, refresh_token_layer};
use auth::{AuthConfig, PgUserRepository, auth_router};
use axum::Router;
use axum::http::HeaderName;
use axum::middleware::from_fn_with_state;
use chrono::Duration;
use platform::token::Algorithm;
use projects::{PgProjectRepository, projects_router};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer, ExposeHeaders};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,projects=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(auth_config_from_env()?);

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let codec = Arc::new(config.token_codec());
    let user_repo = PgUserRepository::new(pool.clone());
    let project_repo = PgProjectRepository::new(pool.clone());

    // Bootstrap the protected admin before the listener binds. A
    // failure here (e.g. configured password below the minimum) must
    // abort startup with no partial state.
    BootstrapUseCase::new(Arc::new(user_repo.clone()), config.clone())
        .execute()
        .await
        .map_err(|e| anyhow::anyhow!("bootstrap failed: {e}"))?;

    // CORS: wide open like the rest of the API surface; the renewal
    // header must be exposed for browser clients to read it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(AllowMethods::any())
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::list([HeaderName::from_static(
            REFRESH_TOKEN_HEADER,
        )]));

    let renewal = RenewalState {
        codec: codec.clone(),
    };

    // Build router; the renewal layer wraps every route so any request
    // bearing a still-valid token gets a fresh one
    let app = Router::new()
        .merge(auth_router(user_repo.clone(), codec.clone(), config))
        .merge(projects_router(project_repo, user_repo, codec))
        .layer(from_fn_with_state(renewal, refresh_token_layer))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the auth configuration from the environment, falling back to
/// the documented defaults for anything unset.
fn auth_config_from_env() -> anyhow::Result<AuthConfig> {
    let defaults = AuthConfig::default();

    let token_algorithm = match env::var("JWT_ALGORITHM") {
        Ok(raw) => {
            let algorithm: Algorithm = raw
                .parse()
                .map_err(|_| anyhow::anyhow!("unsupported JWT_ALGORITHM: {raw}"))?;
            // The codec signs with a shared secret; only the HMAC family fits
            if !matches!(algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
                anyhow::bail!("JWT_ALGORITHM must be one of HS256, HS384, HS512");
            }
            algorithm
        }
        Err(_) => defaults.token_algorithm,
    };

    let token_ttl = match env::var("EXP_TOKEN") {
        Ok(raw) => Duration::minutes(raw.parse()?),
        Err(_) => defaults.token_ttl,
    };

    let min_password_length = match env::var("PASSWORD_LENGTH") {
        Ok(raw) => raw.parse()?,
        Err(_) => defaults.min_password_length,
    };

    Ok(AuthConfig {
        token_secret: env::var("SECRET_KEY").unwrap_or(defaults.token_secret),
        token_algorithm,
        token_ttl,
        min_password_length,
        bootstrap_admin_email: env::var("ADMIN_EMAIL").unwrap_or(defaults.bootstrap_admin_email),
        bootstrap_admin_password: env::var("ADMIN_PASSWORD").unwrap_or_default(),
    })
}
