//! axum integration.
//!
//! [`ApiKey`] implements [`FromRequestParts`], so a handler can simply take it as an argument.
//! Routes that do not need the key itself can be guarded with [`require_api_key`] via
//! `axum::middleware::from_fn`.
//!
//! Rejections are `401 Unauthorized` with a `WWW-Authenticate: ApiKey` challenge and a JSON body:
//!
//! ```json
//! { "error": "malformed authorization header: expected scheme `ApiKey`" }
//! ```

use apikey_core::{constants::API_KEY_SCHEME, get_api_key, AuthError};
use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::{header::WWW_AUTHENTICATE, request::Parts, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::ApiKey;

/// Rejection produced when a request carries no usable API key.
#[derive(Debug)]
pub struct AuthRejection(pub AuthError);

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.0.to_string(),
        });
        (
            StatusCode::UNAUTHORIZED,
            [(WWW_AUTHENTICATE, HeaderValue::from_static(API_KEY_SCHEME))],
            body,
        )
            .into_response()
    }
}

impl From<AuthError> for AuthRejection {
    fn from(err: AuthError) -> Self {
        Self(err)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        get_api_key(&parts.headers).map(ApiKey).map_err(|err| {
            tracing::debug!(error = %err, path = %parts.uri.path(), "Rejected request: no usable API key");
            AuthRejection(err)
        })
    }
}

/// Rejects requests without a well-formed `ApiKey` authorization header.
///
/// On success the extracted [`ApiKey`] is stored in the request extensions, so downstream
/// handlers can read it with `Extension<ApiKey>`.
pub async fn require_api_key(mut req: Request, next: Next) -> Result<Response, AuthRejection> {
    let key = get_api_key(req.headers()).map_err(|err| {
        tracing::debug!(error = %err, path = %req.uri().path(), "Rejected request: no usable API key");
        AuthRejection(err)
    })?;

    req.extensions_mut().insert(ApiKey(key));
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::header::AUTHORIZATION,
        middleware::from_fn,
        routing::get,
        Extension, Router,
    };
    use tower::ServiceExt;

    async fn echo_key(ApiKey(key): ApiKey) -> String {
        key
    }

    async fn echo_extension(Extension(key): Extension<ApiKey>) -> String {
        key.0
    }

    fn app() -> Router {
        Router::new()
            .route("/extract", get(echo_key))
            .route(
                "/guarded",
                get(echo_extension).route_layer(from_fn(require_api_key)),
            )
    }

    fn request(uri: &str, authorization: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_extractor_returns_key() {
        let response = app()
            .oneshot(request("/extract", Some("ApiKey test-api-key")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "test-api-key");
    }

    #[tokio::test]
    async fn test_extractor_rejects_missing_header() {
        let response = app().oneshot(request("/extract", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(WWW_AUTHENTICATE).unwrap(),
            API_KEY_SCHEME
        );
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"], "no authorization header included");
    }

    #[tokio::test]
    async fn test_extractor_rejects_bearer_token() {
        let response = app()
            .oneshot(request("/extract", Some("Bearer test-api-key")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("malformed authorization header"));
    }

    #[tokio::test]
    async fn test_guard_passes_key_to_handler() {
        let response = app()
            .oneshot(request("/guarded", Some("ApiKey guarded-key")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "guarded-key");
    }

    #[tokio::test]
    async fn test_guard_rejects_glued_scheme() {
        let response = app()
            .oneshot(request("/guarded", Some("ApiKeytest-api-key")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_rejection_from_auth_error() {
        let rejection = AuthRejection::from(AuthError::NoAuthHeader);
        let response = rejection.into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
