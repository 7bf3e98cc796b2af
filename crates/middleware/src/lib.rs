//! # ApiKey Middleware
//!
//! Transport adapters around `apikey-core`.
//!
//! Contains:
//! - An axum extractor ([`ApiKey`]) and a `from_fn` guard ([`rest::require_api_key`])
//! - A tonic interceptor ([`grpc::auth_interceptor`]) and metadata helpers
//!
//! Both paths answer with "unauthenticated" for every extraction failure. Checking the extracted
//! key against issued credentials is left to the service.

#![warn(rust_2018_idioms)]

pub mod grpc;
pub mod rest;

pub use grpc::{api_key_from_metadata, auth_interceptor, status_for};
pub use rest::{require_api_key, AuthRejection};

/// API key taken from `Authorization: ApiKey <token>`.
///
/// Usable directly as an axum extractor, and inserted into request extensions by
/// [`rest::require_api_key`] and [`grpc::auth_interceptor`] so handlers behind those guards can read
/// it back.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(pub String);

impl ApiKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keys end up in request extensions, which are often debug-printed.
impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
