//! HTTP server for the IRSA payroll engine.
//!
//! Configuration comes from the environment:
//! - `PAYROLL_CONFIG_DIR`: directory holding `schedule.yaml` and
//!   `contributions.yaml` (default `./config/irsa_2024`)
//! - `PAYROLL_BIND_ADDR`: listen address (default `0.0.0.0:3000`)
//! - `RUST_LOG`: tracing filter directives (default `info`)

use std::env;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use irsa_payroll::api::{AppState, create_router};
use irsa_payroll::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/irsa_2024";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

fn make_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(make_filter()).init();

    let config_dir = env::var("PAYROLL_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let bind_addr = env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());

    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("failed to load payroll configuration from {config_dir}"))?;
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!(address = %bind_addr, version = env!("CARGO_PKG_VERSION"), "Payroll engine listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
