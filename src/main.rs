use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use lumina_backend::config::{self, AppConfig};
use lumina_backend::http::HttpServer;
use lumina_backend::observability::logging;

#[derive(Parser)]
#[command(name = "lumina-backend")]
#[command(about = "Backend control service for the Lumina desktop app", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults plus environment are used
    /// when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logging::init("lumina_backend=info,tower_http=info");

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "lumina-backend starting");

    let config: AppConfig = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => config::config_from_env()?,
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        remote_shutdown_allowed = config.shutdown.allow_remote,
        shutdown_token_required = config.shutdown.required_token().is_some(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
