//! Zoo records web service.
//!
//! Serves the zoo's HTML pages and a small JSON API over the animal records
//! kept in a flat JSON file:
//!
//!   GET  /api/animals        filter by personalityTraits, diet, species, name
//!   GET  /api/animals/{id}   one animal, or 404
//!   POST /api/animals        add an animal
//!
//! Usage:
//!   zoo-server --port 3001 --data data/animals.json --public public

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use zoo_server::build_router;
use zoo_storage::AnimalStore;

#[derive(Parser, Debug)]
#[command(name = "zoo-server")]
#[command(about = "Zoo records web service")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3001")]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Path to the animals JSON file
    #[arg(short, long, default_value = "data/animals.json")]
    data: PathBuf,

    /// Directory holding the HTML pages and assets
    #[arg(long, default_value = "public")]
    public: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let store = AnimalStore::open(&args.data)
        .with_context(|| format!("Failed to load animals from {}", args.data.display()))?;
    if !args.public.is_dir() {
        warn!("Public directory {} not found; pages will 404", args.public.display());
    }

    let app = build_router(Arc::new(store), &args.public);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .context("Invalid listen address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("API server now on port {}", args.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        warn!("Failed to install Ctrl+C handler: {}", err);
        return;
    }
    info!("Ctrl+C received, shutting down...");
}
