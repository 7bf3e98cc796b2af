//! tonic integration.
//!
//! gRPC carries headers as metadata, so extraction goes through
//! [`apikey_core::parse_authorization`] on the `authorization` metadata entry.

use apikey_core::{constants::AUTHORIZATION_METADATA_KEY, parse_authorization, AuthError};
use tonic::{metadata::MetadataMap, Request, Status};

use crate::ApiKey;

/// Maps an extraction failure to a gRPC status.
///
/// Both kinds become `UNAUTHENTICATED`; the message keeps the distinction.
pub fn status_for(err: &AuthError) -> Status {
    Status::unauthenticated(err.to_string())
}

/// Extracts the API key from the `authorization` metadata entry.
///
/// Only the first entry is considered when the key is repeated.
#[allow(clippy::result_large_err)]
pub fn api_key_from_metadata(metadata: &MetadataMap) -> Result<String, Status> {
    let Some(value) = metadata.get(AUTHORIZATION_METADATA_KEY) else {
        return Err(status_for(&AuthError::NoAuthHeader));
    };

    value
        .to_str()
        .map_err(|_| AuthError::malformed("metadata value is not visible ASCII"))
        .and_then(parse_authorization)
        .map(str::to_owned)
        .map_err(|err| {
            tracing::debug!(error = %err, "Rejected gRPC call: no usable API key");
            status_for(&err)
        })
}

/// Authentication interceptor for gRPC requests.
///
/// Stores the extracted [`ApiKey`] in the request extensions for the service to check.
#[allow(clippy::result_large_err)]
pub fn auth_interceptor(mut req: Request<()>) -> Result<Request<()>, Status> {
    let key = api_key_from_metadata(req.metadata())?;
    req.extensions_mut().insert(ApiKey(key));
    Ok(req)
}
