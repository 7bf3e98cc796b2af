/// Errors returned when extracting an API key from request headers.
///
/// Both variants mean the request is unauthenticated. They are kept apart so a caller can
/// challenge for credentials when none were sent and reject outright when the header is garbage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The `Authorization` header is missing or empty.
    #[error("no authorization header included")]
    NoAuthHeader,
    /// The `Authorization` header is present but is not of the form `ApiKey <token>`.
    #[error("malformed authorization header: {0}")]
    MalformedHeader(String),
}

impl AuthError {
    /// Builds a [`AuthError::MalformedHeader`] with a short reason.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedHeader(reason.into())
    }

    /// Returns `true` when no credentials were presented at all.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::NoAuthHeader)
    }
}

pub type AuthResult<T> = std::result::Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MALFORMED_HEADER_MESSAGE;

    #[test]
    fn test_malformed_message_contains_diagnostic_prefix() {
        let err = AuthError::malformed("unexpected scheme");
        let msg = err.to_string();

        assert!(msg.contains(MALFORMED_HEADER_MESSAGE));
        assert!(msg.contains("unexpected scheme"));
    }

    #[test]
    fn test_no_auth_header_is_missing() {
        assert!(AuthError::NoAuthHeader.is_missing());
        assert!(!AuthError::malformed("x").is_missing());
    }
}
