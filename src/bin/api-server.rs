//! Stockdash API Server
//!
//! Serves dataset inspection, industry volume and technical-indicator chart
//! data as JSON for a charting client.

use dotenvy::dotenv;
use stockdash::config;
use stockdash::core::http::start_server;
use stockdash::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let port = config::get_port();
    let dataset_path = config::get_dataset_path();

    info!("Starting Stockdash API Server");
    info!(environment = %config::get_environment(), "Environment");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);

    if !dataset_path.exists() {
        // The server still starts; dataset endpoints answer 503 until the file appears.
        error!(path = %dataset_path.display(), "File not found. Ensure the file exists.");
    }

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, dataset_path).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
