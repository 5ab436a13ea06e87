//! rattendance library root.
//! Exposes the CLI parser, the server entry point and the internal modules.

pub mod charts;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod dns;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;
pub mod web;

use clap::Parser;
use cli::parser::{Cli, NoipCli};
use config::{Config, NoipConfig};
use db::pool::DbPool;
use errors::AppResult;
use tracing_subscriber::EnvFilter;
use ui::messages;

/// Install the tracing subscriber; `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Apply the command-line overrides on top of the loaded file.
pub fn resolve_config(cli: &Cli) -> AppResult<Config> {
    let mut cfg = Config::load(&cli.config)?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(listen) = &cli.listen {
        cfg.listen = listen.clone();
    }
    Ok(cfg)
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let cfg = resolve_config(&cli)?;

    init_tracing();
    tracing::info!(
        config = %cli.config.display(),
        database = %cfg.database,
        "starting rattendance"
    );

    // 3️⃣ open storage and chart font
    let pool = DbPool::open(&cfg.database)?;
    match charts::register_first_available(cfg.chart_font.as_deref()) {
        Some(font) => tracing::info!(font = %font.display(), "chart font registered"),
        None => tracing::warn!("no chart font available, charts will have no labels"),
    }

    // 4️⃣ serve until ctrl-c
    let app = web::router(web::AppState::new(pool.clone()));
    let listener = tokio::net::TcpListener::bind(cfg.listen.as_str()).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shutting down");
    pool.close()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "cannot listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}

/// Entry point of the `noip-update` binary.
pub fn run_noip_update() -> AppResult<()> {
    let cli = NoipCli::parse();
    let cfg = NoipConfig::load(&cli.config)?;

    let output = dns::run_update(&cfg)?;

    messages::section("Output", &output.stdout);
    messages::section("Errors", &output.stderr);
    Ok(())
}
