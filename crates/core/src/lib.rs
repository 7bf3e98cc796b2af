//! # ApiKey Core
//!
//! Extraction of API keys sent with the `Authorization: ApiKey <token>` scheme.
//!
//! This crate contains the pure header-parsing logic only:
//! - [`get_api_key`] pulls the key out of an [`http::HeaderMap`]
//! - [`parse_authorization`] does the same for a single decoded header value
//! - [`authorization_value`] builds the header a client sends
//!
//! **No transport concerns**: axum extractors, tonic interceptors and the CLI live in
//! `apikey-middleware` and `apikey-cli`. Checking the key against a credential store is left to the
//! caller.

pub mod constants;
mod error;
pub mod extract;

pub use error::{AuthError, AuthResult};
pub use extract::{authorization_value, get_api_key, parse_authorization};
