//! # Session Module
//!
//! Carries the logged-in flag in a cookie.
//!
//! The cookie value is base64url (no padding) over the JSON form of
//! `interviewai_core::Session`. It is not signed: the flag only switches
//! between two sets of sample data, so there is nothing to protect.
//!
//! A missing cookie means a guest. A cookie that fails to decode is logged
//! and also treated as a guest.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use interviewai_core::Session;
use tracing::warn;

use crate::error::AppError;

/// Cookie name.
pub const SESSION_COOKIE: &str = "interviewai_session";

const COOKIE_ATTRIBUTES: &str = "Path=/; HttpOnly; SameSite=Lax";

// =============================================================================
// ENCODING
// =============================================================================

/// Encode a session as a cookie value.
pub fn encode(session: &Session) -> Result<String, AppError> {
    let json = serde_json::to_vec(session)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decode a cookie value back into a session.
pub fn decode(value: &str) -> Result<Session, AppError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(value.trim())
        .map_err(|e| AppError::Session(format!("invalid base64: {e}")))?;
    serde_json::from_slice(&bytes).map_err(|e| AppError::Session(format!("invalid payload: {e}")))
}

/// `Cookie` header value carrying `session`, for building requests.
pub fn cookie_pair(session: &Session) -> Result<String, AppError> {
    Ok(format!("{}={}", SESSION_COOKIE, encode(session)?))
}

/// `Set-Cookie` value that stores `session`.
pub fn set_cookie(session: &Session) -> Result<HeaderValue, AppError> {
    let value = format!("{}; {}", cookie_pair(session)?, COOKIE_ATTRIBUTES);
    HeaderValue::from_str(&value).map_err(|e| AppError::Session(e.to_string()))
}

/// `Set-Cookie` value that deletes the session cookie.
#[must_use]
pub fn clear_cookie() -> HeaderValue {
    HeaderValue::from_static("interviewai_session=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

// =============================================================================
// EXTRACTION
// =============================================================================

/// Find the raw session cookie value among all `Cookie` headers.
fn find_cookie(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value)
}

/// Read the session from request headers.
#[must_use]
pub fn from_headers(headers: &HeaderMap) -> Session {
    match find_cookie(headers) {
        None | Some("") => Session::guest(),
        Some(value) => decode(value).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring malformed session cookie");
            Session::guest()
        }),
    }
}

/// Extractor for the visitor's session.
#[derive(Debug, Clone, Copy)]
pub struct CurrentSession(pub Session);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(from_headers(&parts.headers)))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(cookie) {
            headers.insert(COOKIE, value);
        }
        headers
    }

    #[test]
    fn member_session_survives_encoding() {
        let encoded = encode(&Session::member()).unwrap_or_default();
        assert!(!encoded.is_empty());
        assert_eq!(decode(&encoded).ok(), Some(Session::member()));
    }

    #[test]
    fn missing_cookie_is_guest() {
        assert_eq!(from_headers(&HeaderMap::new()), Session::guest());
    }

    #[test]
    fn cookie_found_among_others() {
        let pair = cookie_pair(&Session::member()).unwrap_or_default();
        let headers = headers_with(&format!("theme=dark; {pair}; lang=en"));
        assert_eq!(from_headers(&headers), Session::member());
    }

    #[test]
    fn malformed_cookie_is_guest() {
        let headers = headers_with("interviewai_session=%%%not-base64");
        assert_eq!(from_headers(&headers), Session::guest());

        let not_json = URL_SAFE_NO_PAD.encode(b"logged_in");
        let headers = headers_with(&format!("interviewai_session={not_json}"));
        assert_eq!(from_headers(&headers), Session::guest());
    }

    #[test]
    fn cleared_cookie_is_guest() {
        assert_eq!(
            from_headers(&headers_with("interviewai_session=")),
            Session::guest()
        );
    }

    #[test]
    fn set_cookie_has_attributes() {
        let header = set_cookie(&Session::member())
            .ok()
            .and_then(|v| v.to_str().ok().map(str::to_owned))
            .unwrap_or_default();
        assert!(header.starts_with("interviewai_session="));
        assert!(header.contains("HttpOnly"));
        assert!(header.contains("Path=/"));
        assert!(clear_cookie().to_str().unwrap_or_default().contains("Max-Age=0"));
    }
}
