//! `apikey` command-line tool.
//!
//! ## Purpose
//! Lets operators see how a service will read an `Authorization` header before wiring a client
//! up, and prints the header a client should send for a given key.

mod config;

use apikey_core::{authorization_value, get_api_key, AuthError};
use clap::{Parser, Subcommand};
use http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{CliConfig, AUTHORIZATION_ENV};

#[derive(Parser)]
#[command(name = "apikey")]
#[command(about = "Inspect `Authorization: ApiKey <token>` headers")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the API key from an Authorization header value
    Check {
        /// Header value, e.g. "ApiKey my-key" (defaults to $AUTHORIZATION)
        value: Option<String>,
    },
    /// Print the Authorization header a client should send for a key
    Header {
        /// The API key
        key: String,
    },
}

/// Outcome of `apikey check`.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct CheckReport {
    key: Option<String>,
    error: Option<String>,
}

impl CheckReport {
    fn from_result(result: Result<String, AuthError>) -> Self {
        match result {
            Ok(key) => Self {
                key: Some(key),
                error: None,
            },
            Err(err) => Self {
                key: None,
                error: Some(err.to_string()),
            },
        }
    }
}

/// Runs the extractor over a single header value, as a server would see it.
///
/// `None` means the request carried no `Authorization` header at all.
fn check(value: Option<&str>) -> Result<String, AuthError> {
    let mut headers = HeaderMap::new();
    if let Some(value) = value {
        let value = HeaderValue::from_str(value)
            .map_err(|_| AuthError::malformed("value contains bytes not allowed in a header"))?;
        headers.insert(AUTHORIZATION, value);
    }
    get_api_key(&headers)
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("apikey=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env();

    match cli.command {
        Some(Commands::Check { value }) => {
            let value = match value {
                Some(value) => Some(value),
                None => {
                    tracing::debug!("No value given, falling back to ${}", AUTHORIZATION_ENV);
                    config.authorization().map(str::to_owned)
                }
            };

            let result = check(value.as_deref());
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string(&CheckReport::from_result(result.clone()))?
                );
            }
            match result {
                Ok(key) if !cli.json => println!("{key}"),
                Ok(_) => {}
                Err(err) => anyhow::bail!(err),
            }
        }
        Some(Commands::Header { key }) => {
            let value = authorization_value(&key)?;
            let value = value.to_str()?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({ "name": AUTHORIZATION.as_str(), "value": value })
                );
            } else {
                println!("{}: {}", AUTHORIZATION, value);
            }
        }
        None => {
            println!("Use 'apikey --help' for commands");
        }
    }

    Ok(())
}
