//! Backend API Client
//!
//! The single outbound seam of the gateway. Route crates depend on the
//! [`BackendApi`] trait; [`HttpBackendClient`] is the `reqwest` implementation
//! constructed once at startup and shared through router state.

use axum::http::{HeaderMap, HeaderValue, header};
use kernel::envelope::Envelope;
use kernel::error::app_error::AppError;
use reqwest::{Client, Response};
use serde_json::Value;

use crate::config::BackendConfig;
use crate::multipart::MultipartBody;

pub type BackendResult<T> = Result<T, BackendError>;

/// Query string pairs forwarded verbatim (empty values included)
pub type Query<'a> = &'a [(&'a str, &'a str)];

/// Outbound call failures
///
/// `Display` is the promoted message: the backend's own `error` / `message`
/// field when it sent one, otherwise the transport-level message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// Backend answered with a non-2xx status
    #[error("{message}")]
    Status {
        endpoint: String,
        status: u16,
        message: String,
    },

    /// The fixed client timeout elapsed
    #[error("{message}")]
    Timeout { endpoint: String, message: String },

    /// Connection, TLS, or request-building failure
    #[error("{message}")]
    Transport { endpoint: String, message: String },

    /// 2xx answer that does not honour the envelope contract
    #[error("Upstream contract violation: {message}")]
    Contract { endpoint: String, message: String },
}

impl BackendError {
    pub fn endpoint(&self) -> &str {
        match self {
            BackendError::Status { endpoint, .. }
            | BackendError::Timeout { endpoint, .. }
            | BackendError::Transport { endpoint, .. }
            | BackendError::Contract { endpoint, .. } => endpoint,
        }
    }

    /// Upstream HTTP status, when the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_contract_violation(&self) -> bool {
        matches!(self, BackendError::Contract { .. })
    }

    /// Render as the uniform error, under the handler's fixed message.
    ///
    /// Contract violations become 502; every other failure is a 500.
    pub fn to_app_error(&self, message: &'static str) -> AppError {
        let err = if self.is_contract_violation() {
            AppError::bad_gateway(message)
        } else {
            AppError::internal(message)
        };
        err.with_detail(self.to_string())
    }

    fn from_reqwest(endpoint: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BackendError::Timeout {
                endpoint: endpoint.to_string(),
                message: format!("timeout exceeded: {err}"),
            }
        } else {
            BackendError::Transport {
                endpoint: endpoint.to_string(),
                message: err.to_string(),
            }
        }
    }
}

/// Backend API trait
#[trait_variant::make(BackendApi: Send)]
pub trait LocalBackendApi {
    /// GET `endpoint` with the given query string
    async fn get(
        &self,
        endpoint: &str,
        query: Query<'_>,
        headers: Option<HeaderMap>,
    ) -> BackendResult<Value>;

    /// POST a JSON body to `endpoint`
    async fn post(
        &self,
        endpoint: &str,
        body: &Value,
        headers: Option<HeaderMap>,
    ) -> BackendResult<Value>;

    /// POST a multipart body to `endpoint`
    async fn post_multipart(
        &self,
        endpoint: &str,
        body: MultipartBody,
        headers: Option<HeaderMap>,
    ) -> BackendResult<Value>;
}

/// Headers for an outgoing request.
///
/// JSON requests always carry `Content-Type: application/json`. Multipart
/// requests drop any caller-supplied content type so the client can set
/// `multipart/form-data` with its own boundary.
pub fn outgoing_headers(extra: Option<HeaderMap>, multipart: bool) -> HeaderMap {
    let mut headers = extra.unwrap_or_default();
    if multipart {
        headers.remove(header::CONTENT_TYPE);
    } else {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
    }
    headers
}

/// `reqwest`-backed implementation of [`BackendApi`]
#[derive(Debug, Clone)]
pub struct HttpBackendClient {
    http: Client,
    config: BackendConfig,
}

impl HttpBackendClient {
    pub fn new(config: BackendConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    async fn read(&self, endpoint: &str, response: Response) -> BackendResult<Value> {
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| BackendError::from_reqwest(endpoint, e))?;

        if !status.is_success() {
            let body: Option<Value> = serde_json::from_slice(&bytes).ok();
            let message = body
                .as_ref()
                .and_then(|b| Envelope::new(b).error_message())
                .map(str::to_owned)
                .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));

            return Err(BackendError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|e| BackendError::Contract {
            endpoint: endpoint.to_string(),
            message: format!("response body is not JSON: {e}"),
        })
    }
}

/// Log a failed call with its endpoint, status and message.
fn logged(result: BackendResult<Value>) -> BackendResult<Value> {
    if let Err(err) = &result {
        tracing::error!(
            endpoint = %err.endpoint(),
            status = ?err.status(),
            message = %err,
            "Backend request failed"
        );
    }
    result
}

impl BackendApi for HttpBackendClient {
    async fn get(
        &self,
        endpoint: &str,
        query: Query<'_>,
        headers: Option<HeaderMap>,
    ) -> BackendResult<Value> {
        let url = self.config.url_for(endpoint);
        tracing::debug!(endpoint = %endpoint, "Forwarding GET");

        let result = match self
            .http
            .get(&url)
            .headers(outgoing_headers(headers, false))
            .query(query)
            .send()
            .await
        {
            Ok(response) => self.read(endpoint, response).await,
            Err(e) => Err(BackendError::from_reqwest(endpoint, e)),
        };
        logged(result)
    }

    async fn post(
        &self,
        endpoint: &str,
        body: &Value,
        headers: Option<HeaderMap>,
    ) -> BackendResult<Value> {
        let url = self.config.url_for(endpoint);
        tracing::debug!(endpoint = %endpoint, "Forwarding POST");

        let result = match self
            .http
            .post(&url)
            .headers(outgoing_headers(headers, false))
            .json(body)
            .send()
            .await
        {
            Ok(response) => self.read(endpoint, response).await,
            Err(e) => Err(BackendError::from_reqwest(endpoint, e)),
        };
        logged(result)
    }

    async fn post_multipart(
        &self,
        endpoint: &str,
        body: MultipartBody,
        headers: Option<HeaderMap>,
    ) -> BackendResult<Value> {
        let url = self.config.url_for(endpoint);
        tracing::debug!(
            endpoint = %endpoint,
            files = body.file_count(),
            texts = body.text_count(),
            "Forwarding multipart POST"
        );

        let form = match body.into_form() {
            Ok(form) => form,
            Err(e) => return logged(Err(BackendError::from_reqwest(endpoint, e))),
        };

        let result = match self
            .http
            .post(&url)
            .headers(outgoing_headers(headers, true))
            .multipart(form)
            .send()
            .await
        {
            Ok(response) => self.read(endpoint, response).await,
            Err(e) => Err(BackendError::from_reqwest(endpoint, e)),
        };
        logged(result)
    }
}

#[cfg(test)]
mod tests {
    use super::{BackendApi, BackendError, HttpBackendClient, outgoing_headers};
    use crate::config::BackendConfig;
    use crate::multipart::MultipartBody;
    use axum::http::{HeaderMap, HeaderValue, header};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header as header_is, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HttpBackendClient {
        HttpBackendClient::new(BackendConfig::new(&server.uri()).unwrap()).unwrap()
    }

    #[test]
    fn test_outgoing_headers_json() {
        let headers = outgoing_headers(None, false);
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_outgoing_headers_multipart_strips_content_type() {
        let mut extra = HeaderMap::new();
        extra.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        extra.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer t"));

        let headers = outgoing_headers(Some(extra), true);
        assert!(headers.get(header::CONTENT_TYPE).is_none());
        assert_eq!(headers[header::AUTHORIZATION], "Bearer t");
    }

    #[test]
    fn test_to_app_error_status_mapping() {
        let status = BackendError::Status {
            endpoint: "/news/get".into(),
            status: 404,
            message: "News not found".into(),
        };
        let err = status.to_app_error("Failed to fetch news");
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.detail(), Some("News not found"));

        let contract = BackendError::Contract {
            endpoint: "/news/get".into(),
            message: "bad".into(),
        };
        assert_eq!(contract.to_app_error("x").status_code(), 502);
    }

    #[tokio::test]
    async fn test_get_forwards_query_and_decodes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/news/get"))
            .and(query_param("page", "2"))
            .and(query_param("subCategoryName", ""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "docs": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let body = client_for(&server)
            .get("/news/get", &[("page", "2"), ("subCategoryName", "")], None)
            .await
            .unwrap();
        assert_eq!(body, json!({ "docs": [] }));
    }

    #[tokio::test]
    async fn test_post_sends_json_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/signup"))
            .and(header_is("content-type", "application/json"))
            .and(body_json(json!({ "email": "a@b.c" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "status": true })))
            .expect(1)
            .mount(&server)
            .await;

        let body = client_for(&server)
            .post("/auth/signup", &json!({ "email": "a@b.c" }), None)
            .await
            .unwrap();
        assert_eq!(body["status"], true);
    }

    #[tokio::test]
    async fn test_error_field_is_promoted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/signin"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": "Invalid credentials",
                "message": "Unauthorized"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .post("/auth/signin", &json!({}), None)
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_message_field_is_promoted_when_no_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/category/get"))
            .respond_with(
                ResponseTemplate::new(422).set_body_json(json!({ "message": "Bad limit" })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get("/category/get", &[], None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Bad limit");
    }

    #[tokio::test]
    async fn test_transport_message_when_body_is_opaque() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/category/get"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get("/category/get", &[], None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status code 503");
    }

    #[tokio::test]
    async fn test_non_json_success_is_contract_violation() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/news/detail"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get("/news/detail", &[("slug", "x")], None)
            .await
            .unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[tokio::test]
    async fn test_timeout_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let mut config = BackendConfig::new(&server.uri()).unwrap();
        config.request_timeout = Duration::from_millis(50);
        let client = HttpBackendClient::new(config).unwrap();

        let err = client.get("/slow", &[], None).await.unwrap_err();
        assert!(matches!(err, BackendError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_multipart_sets_boundary_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/upload-profile-picture"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": true })))
            .expect(1)
            .mount(&server)
            .await;

        let body = MultipartBody::new()
            .file("profilePicture", "me.png", "image/png", b"PNGDATA".to_vec())
            .text("userId", "42");

        let mut extra = HeaderMap::new();
        extra.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        client_for(&server)
            .post_multipart("/user/upload-profile-picture", body, Some(extra))
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let content_type = requests[0].headers[header::CONTENT_TYPE.as_str()]
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("multipart/form-data; boundary="));

        let raw = String::from_utf8_lossy(&requests[0].body);
        assert!(raw.contains("filename=\"me.png\""));
        assert!(raw.contains("Content-Type: image/png"));
        assert!(raw.contains("PNGDATA"));
        assert!(raw.contains("name=\"userId\""));
    }
}
