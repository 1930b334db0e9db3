//! Scripted [`BackendApi`] for router tests
//!
//! Records every outbound call and answers with a preset reply.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::http::HeaderMap;
use serde_json::Value;

use crate::backend::{BackendApi, BackendError, BackendResult, Query};
use crate::multipart::MultipartBody;

/// What the gateway sent upstream
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedBody {
    None,
    Json(Value),
    Multipart(MultipartBody),
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: &'static str,
    pub endpoint: String,
    pub query: Vec<(String, String)>,
    pub body: RecordedBody,
    pub headers: Option<HeaderMap>,
}

impl RecordedCall {
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct FakeBackend {
    reply: Arc<Mutex<BackendResult<Value>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self::replying(Value::Null)
    }
}

impl FakeBackend {
    pub fn replying(body: Value) -> Self {
        Self {
            reply: Arc::new(Mutex::new(Ok(body))),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(err: BackendError) -> Self {
        let fake = Self::default();
        *lock(&fake.reply) = Err(err);
        fake
    }

    /// A non-2xx upstream answer with the given promoted message
    pub fn failing_status(endpoint: &str, status: u16, message: &str) -> Self {
        Self::failing(BackendError::Status {
            endpoint: endpoint.to_string(),
            status,
            message: message.to_string(),
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        lock(&self.calls).last().cloned()
    }

    fn record(&self, call: RecordedCall) -> BackendResult<Value> {
        lock(&self.calls).push(call);
        lock(&self.reply).clone()
    }
}

// A panicking test thread must not hide the calls it already recorded.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl BackendApi for FakeBackend {
    async fn get(
        &self,
        endpoint: &str,
        query: Query<'_>,
        headers: Option<HeaderMap>,
    ) -> BackendResult<Value> {
        self.record(RecordedCall {
            method: "GET",
            endpoint: endpoint.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: RecordedBody::None,
            headers,
        })
    }

    async fn post(
        &self,
        endpoint: &str,
        body: &Value,
        headers: Option<HeaderMap>,
    ) -> BackendResult<Value> {
        self.record(RecordedCall {
            method: "POST",
            endpoint: endpoint.to_string(),
            query: Vec::new(),
            body: RecordedBody::Json(body.clone()),
            headers,
        })
    }

    async fn post_multipart(
        &self,
        endpoint: &str,
        body: MultipartBody,
        headers: Option<HeaderMap>,
    ) -> BackendResult<Value> {
        self.record(RecordedCall {
            method: "POST",
            endpoint: endpoint.to_string(),
            query: Vec::new(),
            body: RecordedBody::Multipart(body),
            headers,
        })
    }
}
