//! Portal Router

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use platform::{BackendApi, HttpBackendClient};
use std::sync::Arc;

use crate::presentation::handlers::{self, PortalAppState};

/// Upper bound for a profile picture upload (10 MiB)
pub const PROFILE_PICTURE_LIMIT: usize = 10 * 1024 * 1024;

/// Create the Portal router with the HTTP backend client
pub fn portal_router(backend: Arc<HttpBackendClient>) -> Router {
    portal_router_generic(backend)
}

/// Create a generic Portal router for any backend implementation
pub fn portal_router_generic<B>(backend: Arc<B>) -> Router
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    let state = PortalAppState { backend };

    Router::new()
        // User
        .route("/user/update-profile", post(handlers::update_profile::<B>))
        .route(
            "/user/profile-picture",
            post(handlers::upload_profile_picture::<B>)
                .layer(DefaultBodyLimit::max(PROFILE_PICTURE_LIMIT)),
        )
        // Categories / News
        .route("/category/get", get(handlers::get_categories::<B>))
        .route("/news/get", get(handlers::get_news::<B>))
        .route("/news/detail", get(handlers::get_news_detail::<B>))
        // Comments / Likes
        .route("/comments/get", get(handlers::get_comments::<B>))
        .route("/comments/add", post(handlers::add_comment::<B>))
        .route("/likes/get", get(handlers::get_likes::<B>))
        .route("/likes/toggle", post(handlers::toggle_like::<B>))
        // Consultation
        .route("/consultation/get", get(handlers::get_consultations::<B>))
        .route("/consultation/create", post(handlers::create_consultation::<B>))
        // Wallet
        .route("/wallet/approvals", get(handlers::get_wallet_approvals::<B>))
        .route("/wallet/approve", post(handlers::approve_transaction::<B>))
        .route("/wallet/reject", post(handlers::reject_transaction::<B>))
        .with_state(state)
}
