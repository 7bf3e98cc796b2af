//! CLI runtime configuration.
//!
//! Environment variables are read once at startup (after `.env` is loaded) and passed into the
//! commands, rather than being looked up while a command runs.

/// Environment variable holding a default `Authorization` value for `apikey check`.
pub const AUTHORIZATION_ENV: &str = "AUTHORIZATION";

/// Configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    authorization: Option<String>,
}

impl CliConfig {
    pub fn new(authorization: Option<String>) -> Self {
        Self { authorization }
    }

    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::new(std::env::var(AUTHORIZATION_ENV).ok())
    }

    /// The `Authorization` value to check when none is passed on the command line.
    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }
}
