//! Extraction of API keys from the `Authorization` header.
//!
//! Clients authenticate with a custom scheme:
//!
//! ```text
//! Authorization: ApiKey <token>
//! ```
//!
//! The functions here only check the *shape* of the header. Whether the token is a key that the
//! service actually issued is the caller's business.
//!
//! All functions are pure: they never log, never allocate more than the returned key and never
//! touch the header collection they are given.

use http::{HeaderMap, HeaderValue};

use crate::constants::{API_KEY_SCHEME, AUTHORIZATION_HEADER};
use crate::{AuthError, AuthResult};

/// Extracts the API key from the `Authorization` header of a request.
///
/// Only the first `Authorization` value is considered when the header is repeated.
///
/// # Arguments
/// * `headers` - The request headers. Header names are matched case-insensitively.
///
/// # Returns
/// * `Ok(String)` - The non-empty key following `ApiKey `
/// * `Err(AuthError::NoAuthHeader)` - If the header is absent or empty
/// * `Err(AuthError::MalformedHeader)` - For any other value that is not `ApiKey <token>`
pub fn get_api_key(headers: &HeaderMap) -> AuthResult<String> {
    let Some(value) = headers.get(AUTHORIZATION_HEADER) else {
        return Err(AuthError::NoAuthHeader);
    };
    if value.is_empty() {
        return Err(AuthError::NoAuthHeader);
    }

    let value = value
        .to_str()
        .map_err(|_| AuthError::malformed("header value is not visible ASCII"))?;

    parse_authorization(value).map(str::to_owned)
}

/// Parses an already decoded `Authorization` value of the form `ApiKey <token>`.
///
/// This is the borrowing core of [`get_api_key`], useful where headers do not arrive as a
/// [`HeaderMap`] (for example gRPC metadata).
///
/// An empty value is reported as [`AuthError::NoAuthHeader`], matching an absent header.
pub fn parse_authorization(value: &str) -> AuthResult<&str> {
    if value.is_empty() {
        return Err(AuthError::NoAuthHeader);
    }

    let (scheme, key) = value
        .split_once(' ')
        .ok_or_else(|| AuthError::malformed("expected `ApiKey <key>`"))?;

    if scheme != API_KEY_SCHEME {
        return Err(AuthError::malformed("expected scheme `ApiKey`"));
    }
    if key.is_empty() {
        return Err(AuthError::malformed("missing API key after scheme"));
    }
    if key.contains(' ') {
        return Err(AuthError::malformed("API key must not contain spaces"));
    }

    Ok(key)
}

/// Builds the `Authorization` header value a client sends for `key`.
///
/// The returned value is marked sensitive so `http`-aware loggers redact it. It is always
/// accepted by [`get_api_key`], which hands back `key` unchanged.
///
/// # Errors
/// Returns [`AuthError::MalformedHeader`] if `key` is empty, contains a space, or contains bytes
/// that cannot appear in a header value.
pub fn authorization_value(key: &str) -> AuthResult<HeaderValue> {
    if key.is_empty() {
        return Err(AuthError::malformed("API key must not be empty"));
    }
    if key.contains(' ') {
        return Err(AuthError::malformed("API key must not contain spaces"));
    }

    let mut value = HeaderValue::from_str(&format!("{API_KEY_SCHEME} {key}"))
        .map_err(|_| AuthError::malformed("API key contains bytes not allowed in a header"))?;
    value.set_sensitive(true);
    Ok(value)
}
