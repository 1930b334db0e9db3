//! Gateway Server Entry Point
//!
//! Loads configuration, builds the backend client once, and serves the
//! auth and portal routers behind CORS and request tracing.
//! Uses `anyhow` for startup errors, but request-level errors go through
//! `kernel::error::AppError`.

use auth::{AuthConfig, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
    response::IntoResponse,
};
use kernel::error::app_error::AppError;
use platform::{BackendConfig, HttpBackendClient};
use portal::portal_router;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};


const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "gateway=info,auth=info,portal=info,platform=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Backend client, shared by every router
    let backend_config = BackendConfig::from_env()?;
    tracing::info!(
        base_url = %backend_config.base_url,
        timeout_secs = backend_config.request_timeout.as_secs(),
        "Backend configured"
    );
    let backend = Arc::new(HttpBackendClient::new(backend_config)?);

    // Cookie policy
    let app_env = env::var("APP_ENV").ok();
    let auth_config = AuthConfig::for_environment(app_env.as_deref());
    if !auth_config.cookie_secure {
        tracing::warn!("Session cookies are issued without the Secure attribute");
    }

    // Build router
    let app = Router::new()
        .nest("/api/auth", auth_router(backend.clone(), auth_config))
        .nest("/api", portal_router(backend))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer());

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// CORS configuration from `FRONTEND_ORIGINS` (comma separated)
fn cors_layer() -> CorsLayer {
    let frontend_origins =
        env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}

async fn not_found(uri: http::Uri) -> impl IntoResponse {
    AppError::not_found("Route not found").with_detail(uri.path().to_string())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
