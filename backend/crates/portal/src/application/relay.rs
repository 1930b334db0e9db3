//! Relay Use Case
//!
//! One awaited backend call per request, answered through
//! `platform::relay`. No retries.

use std::sync::Arc;

use axum::http::HeaderMap;
use platform::relay::Relayed;
use platform::{BackendApi, BackendResult, MultipartBody};
use serde_json::Value;

use crate::application::Route;
use crate::application::query::ForwardQuery;
use crate::error::{PortalError, PortalResult};

pub struct RelayUseCase<B>
where
    B: BackendApi,
{
    backend: Arc<B>,
}

impl<B> RelayUseCase<B>
where
    B: BackendApi,
{
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// GET with query parameters
    pub async fn fetch(
        &self,
        route: Route,
        query: &ForwardQuery,
        headers: Option<HeaderMap>,
    ) -> PortalResult<Relayed> {
        let pairs = query.pairs();
        let reply = self.backend.get(route.endpoint, &pairs, headers).await;
        relay(route, reply)
    }

    /// POST a JSON body verbatim
    pub async fn submit(
        &self,
        route: Route,
        body: &Value,
        headers: Option<HeaderMap>,
    ) -> PortalResult<Relayed> {
        let reply = self.backend.post(route.endpoint, body, headers).await;
        relay(route, reply)
    }

    /// POST a rebuilt multipart form
    pub async fn upload(
        &self,
        route: Route,
        body: MultipartBody,
        headers: Option<HeaderMap>,
    ) -> PortalResult<Relayed> {
        tracing::debug!(
            endpoint = route.endpoint,
            files = body.file_count(),
            fields = body.text_count(),
            "Forwarding multipart upload"
        );
        let reply = self
            .backend
            .post_multipart(route.endpoint, body, headers)
            .await;
        relay(route, reply)
    }
}

fn relay(route: Route, reply: BackendResult<Value>) -> PortalResult<Relayed> {
    let body = reply.map_err(PortalError::backend(route.failure))?;
    let relayed =
        Relayed::from_backend(route.endpoint, body).map_err(PortalError::backend(route.failure))?;

    tracing::debug!(endpoint = route.endpoint, status = %relayed.status, "Relayed backend response");
    Ok(relayed)
}
