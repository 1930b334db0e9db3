//! HTTP Handlers
//!
//! Every handler forwards to exactly one backend endpoint and relays the
//! answer. Failures render as the uniform error envelope.

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Query, State};
use platform::BackendApi;
use platform::client::Forwarded;
use platform::relay::Relayed;
use serde_json::Value;
use std::sync::Arc;

use crate::application::{ForwardQuery, RelayUseCase, Route, routes};
use crate::error::{PortalError, PortalResult};
use crate::presentation::dto::{
    CommentsQuery, ConsultationQuery, LikesQuery, NewsDetailQuery, NewsListQuery, PageQuery,
};
use crate::presentation::upload::read_multipart;

/// Shared state for portal handlers
#[derive(Clone)]
pub struct PortalAppState<B>
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    pub backend: Arc<B>,
}

impl<B> PortalAppState<B>
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    fn relay(&self) -> RelayUseCase<B> {
        RelayUseCase::new(self.backend.clone())
    }

    /// Forward a JSON body; an unreadable body never reaches the backend
    async fn submit(
        &self,
        route: Route,
        forwarded: Forwarded,
        body: Result<Json<Value>, JsonRejection>,
    ) -> PortalResult<Relayed> {
        let Json(body) = body.map_err(PortalError::invalid_body(route.failure))?;

        self.relay()
            .submit(route, &body, forwarded.into_headers())
            .await
    }

    async fn fetch(
        &self,
        route: Route,
        forwarded: Forwarded,
        query: &ForwardQuery,
    ) -> PortalResult<Relayed> {
        self.relay()
            .fetch(route, query, forwarded.into_headers())
            .await
    }
}

// ============================================================================
// User
// ============================================================================

/// POST /api/user/update-profile
pub async fn update_profile<B>(
    State(state): State<PortalAppState<B>>,
    forwarded: Forwarded,
    body: Result<Json<Value>, JsonRejection>,
) -> PortalResult<Relayed>
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    state.submit(routes::UPDATE_PROFILE, forwarded, body).await
}

/// POST /api/user/profile-picture
pub async fn upload_profile_picture<B>(
    State(state): State<PortalAppState<B>>,
    forwarded: Forwarded,
    multipart: Result<Multipart, MultipartRejection>,
) -> PortalResult<Relayed>
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    let body = read_multipart(multipart?).await?;

    state
        .relay()
        .upload(routes::UPLOAD_PROFILE_PICTURE, body, forwarded.into_headers())
        .await
}

// ============================================================================
// Categories / News
// ============================================================================

/// GET /api/category/get
pub async fn get_categories<B>(
    State(state): State<PortalAppState<B>>,
    forwarded: Forwarded,
    Query(query): Query<PageQuery>,
) -> PortalResult<Relayed>
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    let query = ForwardQuery::new().page(query.params()?);
    state.fetch(routes::CATEGORIES, forwarded, &query).await
}

/// GET /api/news/get
pub async fn get_news<B>(
    State(state): State<PortalAppState<B>>,
    forwarded: Forwarded,
    Query(query): Query<NewsListQuery>,
) -> PortalResult<Relayed>
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    let forward = ForwardQuery::new()
        .page(query.params()?)
        .filter("parentCategoryName", query.parent_category_name.as_deref())
        .filter("subCategoryName", query.sub_category_name.as_deref());

    state.fetch(routes::NEWS, forwarded, &forward).await
}

/// GET /api/news/detail
pub async fn get_news_detail<B>(
    State(state): State<PortalAppState<B>>,
    forwarded: Forwarded,
    Query(query): Query<NewsDetailQuery>,
) -> PortalResult<Relayed>
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    let forward = ForwardQuery::new().filter("slug", query.slug.as_deref());
    state.fetch(routes::NEWS_DETAIL, forwarded, &forward).await
}

// ============================================================================
// Comments / Likes
// ============================================================================

/// GET /api/comments/get
pub async fn get_comments<B>(
    State(state): State<PortalAppState<B>>,
    forwarded: Forwarded,
    Query(query): Query<CommentsQuery>,
) -> PortalResult<Relayed>
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    let forward = ForwardQuery::new()
        .filter("newsId", query.news_id.as_ref().map(|id| id.as_str()))
        .page(query.params()?);

    state.fetch(routes::COMMENTS, forwarded, &forward).await
}

/// POST /api/comments/add
pub async fn add_comment<B>(
    State(state): State<PortalAppState<B>>,
    forwarded: Forwarded,
    body: Result<Json<Value>, JsonRejection>,
) -> PortalResult<Relayed>
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    state.submit(routes::ADD_COMMENT, forwarded, body).await
}

/// GET /api/likes/get
pub async fn get_likes<B>(
    State(state): State<PortalAppState<B>>,
    forwarded: Forwarded,
    Query(query): Query<LikesQuery>,
) -> PortalResult<Relayed>
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    let forward = ForwardQuery::new()
        .filter("newsId", query.news_id.as_ref().map(|id| id.as_str()))
        .filter("userId", query.user_id.as_ref().map(|id| id.as_str()));

    state.fetch(routes::LIKES, forwarded, &forward).await
}

/// POST /api/likes/toggle
pub async fn toggle_like<B>(
    State(state): State<PortalAppState<B>>,
    forwarded: Forwarded,
    body: Result<Json<Value>, JsonRejection>,
) -> PortalResult<Relayed>
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    state.submit(routes::TOGGLE_LIKE, forwarded, body).await
}

// ============================================================================
// Consultation
// ============================================================================

/// GET /api/consultation/get
pub async fn get_consultations<B>(
    State(state): State<PortalAppState<B>>,
    forwarded: Forwarded,
    Query(query): Query<ConsultationQuery>,
) -> PortalResult<Relayed>
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    let forward = ForwardQuery::new()
        .filter("userId", query.user_id.as_ref().map(|id| id.as_str()))
        .page(query.params()?);

    state.fetch(routes::CONSULTATIONS, forwarded, &forward).await
}

/// POST /api/consultation/create
pub async fn create_consultation<B>(
    State(state): State<PortalAppState<B>>,
    forwarded: Forwarded,
    body: Result<Json<Value>, JsonRejection>,
) -> PortalResult<Relayed>
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    state.submit(routes::CREATE_CONSULTATION, forwarded, body).await
}

// ============================================================================
// Wallet
// ============================================================================

/// GET /api/wallet/approvals
pub async fn get_wallet_approvals<B>(
    State(state): State<PortalAppState<B>>,
    forwarded: Forwarded,
    Query(query): Query<PageQuery>,
) -> PortalResult<Relayed>
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    let forward = ForwardQuery::new().page(query.params()?);
    state.fetch(routes::WALLET_APPROVALS, forwarded, &forward).await
}

/// POST /api/wallet/approve
pub async fn approve_transaction<B>(
    State(state): State<PortalAppState<B>>,
    forwarded: Forwarded,
    body: Result<Json<Value>, JsonRejection>,
) -> PortalResult<Relayed>
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    state.submit(routes::APPROVE_TRANSACTION, forwarded, body).await
}

/// POST /api/wallet/reject
pub async fn reject_transaction<B>(
    State(state): State<PortalAppState<B>>,
    forwarded: Forwarded,
    body: Result<Json<Value>, JsonRejection>,
) -> PortalResult<Relayed>
where
    B: BackendApi + Clone + Send + Sync + 'static,
{
    state.submit(routes::REJECT_TRANSACTION, forwarded, body).await
}
