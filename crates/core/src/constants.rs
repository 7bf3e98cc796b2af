//! Constants used throughout the ApiKey extraction crates.
//!
//! Header names and the scheme word live here so the extractor, the transport adapters and the
//! CLI agree on a single spelling.

use http::header::{HeaderName, AUTHORIZATION};

/// Authorization scheme word expected before the key. Matched case-sensitively.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// HTTP header carrying the credential.
pub const AUTHORIZATION_HEADER: HeaderName = AUTHORIZATION;

/// gRPC metadata key carrying the credential (metadata keys are always lowercase).
pub const AUTHORIZATION_METADATA_KEY: &str = "authorization";

/// Diagnostic prefix carried by every malformed-header error message.
pub const MALFORMED_HEADER_MESSAGE: &str = "malformed authorization header";
