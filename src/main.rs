//! coursehub: course catalogue web server.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration, loads the asset store, binds the listener and serves the
//! Axum router until a shutdown signal arrives. Any startup failure returns
//! an error from `main`, so the process exits non-zero.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coursehub::config::{AppConfig, DEFAULT_LOG_FILTER};
use coursehub::{create_router, http, AppState, AssetStore};

/// coursehub: a course catalogue web server
#[derive(Parser, Debug)]
#[command(name = "coursehub", version, about)]
struct Args {
    /// Path to configuration file (default: config/default.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on, overriding the configuration file
    #[arg(short, long)]
    port: Option<u16>,

    /// Asset directory, overriding the configuration file
    #[arg(short, long)]
    asset_dir: Option<PathBuf>,

    /// Log level filter (e.g., "coursehub=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Log filter priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    // Configuration selects the log format, so it is loaded first. Without a
    // usable config the error is still logged, in the default text format.
    let mut config = match AppConfig::resolve(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            init_tracing(&log_filter, false);
            tracing::error!(
                config = ?args.config,
                error = %e,
                "Failed to load configuration"
            );
            return Err(e.into());
        }
    };
    if let Some(port) = args.port {
        config.http.port = port;
    }
    if let Some(dir) = args.asset_dir {
        config.assets.dir = dir;
    }

    init_tracing(&log_filter, config.logging.is_json());

    tracing::info!(
        config = ?args.config,
        port = config.http.port,
        assets = %config.assets.dir.display(),
        "Loaded configuration"
    );

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Fatal error");
        return Err(e);
    }
    Ok(())
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let assets = AssetStore::load(&config.assets.dir)?;
    tracing::info!(courses = assets.catalog().len(), "Loaded asset store");

    let listener = http::bind(&config.bind_address()).await?;

    let state = AppState::new(config, assets);
    let app = create_router(state);

    http::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(filter: &str, json: bool) {
    let registry = tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));

    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
