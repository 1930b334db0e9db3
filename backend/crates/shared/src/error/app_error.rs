//! Application Error
//!
//! [`AppError`] is what every route crate converts its own errors into.
//! It renders as one [`ErrorEnvelope`] shape, whatever went wrong.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use serde::Serialize;

use super::kind::ErrorKind;

type Text = Cow<'static, str>;
type Source = Box<dyn Error + Send + Sync + 'static>;

/// ゲートウェイ統一エラー型
///
/// `message` はハンドラ固定の文言、`detail` はバックエンド等から得た診断情報です。
/// `source` はログ用で、レスポンスには出ません。
///
/// ```rust
/// use kernel::error::app_error::AppError;
///
/// let err = AppError::internal("Failed to fetch news")
///     .with_detail("Request failed with status code 503");
/// assert_eq!(err.status_code(), 500);
/// assert_eq!(err.envelope().error, "Request failed with status code 503");
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Text,
    detail: Option<Text>,
    source: Option<Source>,
}

pub type AppResult<T> = Result<T, AppError>;

/// 統一エラーエンベロープ
///
/// `{ status: false, statusCode, message, error }`。`error` は常に出力し、
/// 詳細が無いときは `message` と同じ値になります。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub status: bool,
    pub status_code: u16,
    pub message: String,
    pub error: String,
}

impl From<&AppError> for ErrorEnvelope {
    fn from(err: &AppError) -> Self {
        Self {
            status: false,
            status_code: err.status_code(),
            message: err.message.to_string(),
            error: err.detail().unwrap_or(&err.message).to_string(),
        }
    }
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<Text>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
            source: None,
        }
    }

    pub fn bad_request(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn unauthorized(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    pub fn not_found(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// バックエンド呼び出しの失敗
    pub fn internal(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    /// 上流の契約違反
    pub fn bad_gateway(message: impl Into<Text>) -> Self {
        Self::new(ErrorKind::BadGateway, message)
    }

    pub fn with_detail(mut self, detail: impl Into<Text>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope::from(self)
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("detail", &self.detail)
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "[{}] {}: {}", self.kind, self.message, detail),
            None => write!(f, "[{}] {}", self.kind, self.message),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn Error + 'static))
    }
}
