mod cli;
mod config;
mod contact;
mod errors;
mod models;
mod pipeline;
mod profile;
mod reader;
mod routes;
mod sections;
mod state;

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("folio_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Parse { input, output } => {
            tokio::task::spawn_blocking(move || cli::run_parse(&input, output.as_deref()))
                .await??;
            Ok(())
        }
    }
}

async fn serve(config: Config) -> Result<()> {
    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        origins = ?config.cors_allowed_origins,
        max_upload_bytes = config.max_upload_bytes,
        "HTTP config loaded"
    );

    let cors = cors_layer(&config);
    let state = AppState {
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
