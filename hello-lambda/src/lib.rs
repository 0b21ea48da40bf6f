//! A Lambda function for a Function URL trigger that replies to every request
//! with a plain-text `Hello World!!`.

use lambda_runtime::Error;
use std::env::var;
use tracing_subscriber::filter::{LevelFilter, ParseError};
use tracing_subscriber::EnvFilter;

pub mod handler;
pub mod types;

pub use handler::{handler, hello_world};
pub use types::{FunctionUrlResponse, ResponseHeaders};

/// Logging filter used when RUST_LOG is not set.
/// The global `error` keeps the runtime's own errors visible in CloudWatch.
const DEFAULT_LOG_DIRECTIVES: &str = "error,hello_lambda=info";

/// Builds the logging filter from RUST_LOG if present or falls back to:
/// - INFO for this crate
/// - ERROR for everything else
pub fn log_filter() -> Result<EnvFilter, ParseError> {
    match var(EnvFilter::DEFAULT_ENV) {
        Ok(v) if !v.trim().is_empty() => Ok(EnvFilter::builder()
            .with_default_directive(LevelFilter::ERROR.into())
            .parse_lossy(v)),
        _ => default_log_filter(),
    }
}

/// The filter applied when RUST_LOG is unset or empty.
pub fn default_log_filter() -> Result<EnvFilter, ParseError> {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse(DEFAULT_LOG_DIRECTIVES)
}

/// Initializes the tracing subscriber for CloudWatch.
/// CloudWatch adds its own timestamps and does not render colour codes.
pub fn init_tracing() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter()?)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .compact()
        .try_init()?;

    Ok(())
}
