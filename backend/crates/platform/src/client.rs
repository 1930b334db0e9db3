//! Client identification utilities
//!
//! Builds the headers a forwarded request carries upstream: the browser's
//! access token as a bearer credential and the forwarding chain in
//! `X-Forwarded-For`.

use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue, header};

use crate::cookie::{ACCESS_TOKEN_COOKIE, extract_cookie};

const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// `X-Forwarded-For` value for the upstream hop
///
/// The incoming chain is kept as received and the direct peer is appended,
/// so the last entry is always an address this gateway observed itself.
/// Without a known peer the header is omitted.
pub fn forwarded_for(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<String> {
    let peer = direct_ip?;

    let mut hops: Vec<String> = headers
        .get_all(X_FORWARDED_FOR)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|xff| xff.split(','))
        .map(str::trim)
        .filter(|hop| !hop.is_empty())
        .map(str::to_owned)
        .collect();
    hops.push(peer.to_string());

    Some(hops.join(", "))
}

/// Headers to attach to the upstream call for this browser request
pub fn forwarding_headers(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> HeaderMap {
    let mut forwarded = HeaderMap::new();

    if let Some(token) = extract_cookie(headers, ACCESS_TOKEN_COOKIE) {
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}")) {
            forwarded.insert(header::AUTHORIZATION, value);
        }
    }

    if let Some(chain) = forwarded_for(headers, direct_ip) {
        if let Ok(value) = HeaderValue::from_str(&chain) {
            forwarded.insert(X_FORWARDED_FOR, value);
        }
    }

    forwarded
}

/// Extractor yielding [`forwarding_headers`] for the current request
///
/// Works with or without `ConnectInfo` (routers driven in tests have none).
#[derive(Debug, Clone, Default)]
pub struct Forwarded(pub HeaderMap);

impl Forwarded {
    pub fn into_headers(self) -> Option<HeaderMap> {
        if self.0.is_empty() { None } else { Some(self.0) }
    }
}

impl<S> FromRequestParts<S> for Forwarded
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let direct_ip = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|info| info.0.ip());

        Ok(Self(forwarding_headers(&parts.headers, direct_ip)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forwarded_for_appends_peer_to_incoming_chain() {
        let mut headers = HeaderMap::new();
        headers.insert(
            X_FORWARDED_FOR,
            HeaderValue::from_static("192.168.1.1, 10.0.0.1"),
        );
        let peer: IpAddr = "203.0.113.7".parse().unwrap();

        let chain = forwarded_for(&headers, Some(peer));
        assert_eq!(chain.as_deref(), Some("192.168.1.1, 10.0.0.1, 203.0.113.7"));
    }

    #[test]
    fn test_forwarded_for_ignores_client_supplied_chain_without_peer() {
        let mut headers = HeaderMap::new();
        headers.insert(X_FORWARDED_FOR, HeaderValue::from_static("1.2.3.4"));

        assert_eq!(forwarded_for(&headers, None), None);
        assert!(forwarding_headers(&headers, None).get(X_FORWARDED_FOR).is_none());
    }

    #[test]
    fn test_forwarded_for_merges_repeated_headers() {
        let mut headers = HeaderMap::new();
        headers.append(X_FORWARDED_FOR, HeaderValue::from_static("1.1.1.1"));
        headers.append(X_FORWARDED_FOR, HeaderValue::from_static(" , 2.2.2.2"));
        let peer: IpAddr = "::1".parse().unwrap();

        let chain = forwarded_for(&headers, Some(peer));
        assert_eq!(chain.as_deref(), Some("1.1.1.1, 2.2.2.2, ::1"));
    }

    #[test]
    fn test_forwarding_headers_bearer_from_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("accessToken=tok123; refreshToken=r"),
        );

        let forwarded = forwarding_headers(&headers, None);
        assert_eq!(forwarded[header::AUTHORIZATION], "Bearer tok123");
        assert!(forwarded.get(X_FORWARDED_FOR).is_none());
    }

    #[test]
    fn test_forwarding_headers_empty_without_cookie_or_ip() {
        let forwarded = forwarding_headers(&HeaderMap::new(), None);
        assert!(forwarded.is_empty());
        assert!(Forwarded(forwarded).into_headers().is_none());
    }

    #[test]
    fn test_forwarding_headers_adds_client_ip() {
        let direct: IpAddr = "10.1.2.3".parse().unwrap();
        let forwarded = forwarding_headers(&HeaderMap::new(), Some(direct));
        assert_eq!(forwarded[X_FORWARDED_FOR], "10.1.2.3");
    }
}
