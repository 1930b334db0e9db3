//! Error Kind
//!
//! The handful of HTTP statuses the gateway itself produces. Everything else
//! the browser sees is the backend's own status, relayed untouched.

use std::fmt;

use serde::Serialize;

/// ゲートウェイ自身が生成するエラーの分類
///
/// リクエスト起因（4xx）と上流起因（5xx）の二系統のみを持ちます。
/// バックエンドが返したステータスはここを通らず、そのまま中継されます。
///
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::BadGateway.status_code(), 502);
/// assert_eq!(ErrorKind::Unauthorized.to_string(), "Unauthorized");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// 不正なクエリ・マルチパート
    BadRequest,
    /// セッション Cookie が無い
    Unauthorized,
    /// 未定義のルート
    NotFound,
    /// バックエンド呼び出しの失敗（タイムアウト・接続失敗・非 2xx）
    InternalServerError,
    /// バックエンドの応答が封筒の契約を守っていない
    BadGateway,
}

impl ErrorKind {
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::NotFound => 404,
            Self::InternalServerError => 500,
            Self::BadGateway => 502,
        }
    }

    /// 標準の理由フレーズ
    #[inline]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::NotFound => "Not Found",
            Self::InternalServerError => "Internal Server Error",
            Self::BadGateway => "Bad Gateway",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorKind::BadRequest.status_code(), 400);
        assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::InternalServerError.status_code(), 500);
        assert_eq!(ErrorKind::BadGateway.status_code(), 502);
    }

    #[test]
    fn test_display_is_reason() {
        assert_eq!(ErrorKind::NotFound.to_string(), "Not Found");
    }
}
