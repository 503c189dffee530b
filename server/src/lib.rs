//! Hosting side of the HarvestNet admin app, used by the `server` feature of
//! the web crate.

mod config;
mod error;

use axum::{Router, routing::get};
use eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

pub use crate::config::Config;
pub use crate::error::Error;

/// Loads configuration, installs tracing and returns the routes to merge into
/// the Dioxus server router.
pub async fn init() -> Result<Router, Error> {
    let config = Config::from_env()?;
    init_tracing(&config)?;

    tracing::info!(health_path = %config.health_path, "HarvestNet server configured");
    Ok(routes(&config))
}

pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter).wrap_err("invalid log filter")?;

    // The Dioxus launcher may already own the global subscriber.
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }

    Ok(())
}

pub fn routes(config: &Config) -> Router {
    Router::new().route(&config.health_path, get(healthz))
}

async fn healthz() -> &'static str {
    "ok"
}
