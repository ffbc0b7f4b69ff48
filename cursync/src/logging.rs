// src/logging.rs
use anyhow::{Result, anyhow};
use std::env;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV_VAR: &str = "CURSYNC_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

fn filter() -> Result<EnvFilter> {
    let directive = env::var(LOG_ENV_VAR)
        .or_else(|_| env::var(EnvFilter::DEFAULT_ENV))
        .unwrap_or_else(|_| DEFAULT_DIRECTIVE.to_owned());
    EnvFilter::try_new(&directive)
        .or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVE))
        .map_err(Into::into)
}

/// Installs the global tracing subscriber.
///
/// Diagnostics go to stderr in compact form so operation lines on stdout
/// stay clean. The level comes from `CURSYNC_LOG`, then `RUST_LOG`, then
/// defaults to `warn`.
///
/// # Errors
///
/// Fails when a global subscriber is already installed.
pub fn init() -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter()?)
        .with(fmt_layer)
        .try_init()
        .map_err(|err| anyhow!("failed to install logger: {err}"))
}
