//! HTTP server for the timesheet engine.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use timesheet_engine::api::{AppState, create_router};
use timesheet_engine::config::ConfigLoader;

/// Serves the timesheet API.
#[derive(Debug, Parser)]
#[command(name = "timesheet-engine", version, about)]
struct Args {
    /// Directory holding server.yaml and roster.yaml.
    #[arg(long, default_value = "./config/default")]
    config_dir: PathBuf,

    /// Listen address, overriding server.yaml.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ConfigLoader::load(&args.config_dir)
        .with_context(|| format!("loading configuration from {}", args.config_dir.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server().log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind = args
        .bind
        .unwrap_or_else(|| config.server().bind_address.clone());
    let service_name = config.server().service_name.clone();
    let employees = config.employees().len();

    let state = AppState::in_memory(config);
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("binding {}", bind))?;

    info!(
        service = %service_name,
        address = %bind,
        employees,
        store = state.store().backend_tag(),
        "Server listening"
    );
    axum::serve(listener, create_router(state))
        .await
        .context("serving HTTP")?;

    Ok(())
}
