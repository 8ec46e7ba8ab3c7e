//! SpaceX Dash server
//!
//! Run with: cargo run -- --data spacex_launch_dash.csv
//!
//! # Configuration
//!
//! Settings come from, in increasing priority: built-in defaults, a TOML
//! config file, `SPACEX_DASH_*` environment variables, and command-line flags.
//! `RUST_LOG` overrides the configured log level.

use anyhow::Context;
use clap::Parser;
use spacex_dash::api::{serve, ApiConfig, AppState};
use spacex_dash::config::{generate_default_config, Config, LoggingConfig};
use spacex_dash::dataset::Dataset;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "spacex-dash")]
#[command(author, version, about = "SpaceX launch records dashboard", long_about = None)]
struct Cli {
    /// Config file (default: search standard locations)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Launch dataset CSV
    #[arg(short, long, value_name = "CSV")]
    data: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(data) = cli.data {
        config.dataset.path = data;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    init_logging(&config.logging);

    tracing::info!("Starting SpaceX Dash v{}", env!("CARGO_PKG_VERSION"));

    let dataset = Dataset::load(&config.dataset.path)
        .with_context(|| format!("loading dataset {}", config.dataset.path.display()))?;
    tracing::info!("Dataset: {}", dataset.stats());

    let api_config = ApiConfig::from(&config.server);
    let state = AppState::new(Arc::new(dataset), api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("SpaceX Dash stopped");
    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("spacex_dash={},tower_http=info", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
