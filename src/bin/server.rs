// GraphQL Gateway - Server binary
// Run with: cargo run --bin server -- --port 3000

//! # GraphQL Gateway Server Binary
//!
//! Loads configuration (defaults, `gateway.toml`, `GATEWAY__*` env vars),
//! applies command-line overrides and serves the GraphQL endpoint until
//! ctrl-c.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use tracing::{debug, info};

use graphql_gateway::{logging, GatewayConfig, GatewayServerBuilder};

#[derive(Parser, Debug)]
#[command(name = "graphql-gateway")]
#[command(about = "Single-endpoint GraphQL over HTTP gateway")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file (defaults to ./gateway.toml if present)
    #[arg(short, long, env = "GATEWAY_CONFIG")]
    config: Option<PathBuf>,

    /// Hostname to listen on
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Path of the GraphQL endpoint
    #[arg(long)]
    path: Option<String>,

    /// Default log level when RUST_LOG is unset
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let dotenv_loaded = dotenv().is_ok();

    let cli = Cli::parse();
    logging::init(&cli.log_level)?;
    if dotenv_loaded {
        debug!("Loaded environment from .env");
    }

    let mut config = GatewayConfig::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(path) = cli.path {
        config.endpoint_path = path;
    }

    info!("Starting GraphQL gateway");
    GatewayServerBuilder::new()
        .with_config(config)
        .build_and_run()
        .await
}
