//! This file defines the energy-stats binary entry point.

use energy_stats::app;
use energy_stats::cli;
use energy_stats::metrics;
use energy_stats::server;
use energy_stats::tracing;

/// Application entry point
#[tokio::main]
async fn main() {
    let args = cli::parse();
    tracing::init_tracing();
    ::tracing::debug!("{:?}", args);
    if let Err(err) = metrics::register_metrics() {
        ::tracing::warn!("failed to register metrics: {}", err);
    }
    let service = app::service(&args);
    if let Err(err) = server::serve(&args, service).await {
        energy_stats::error::log_error_chain(&err);
        std::process::exit(1);
    }
}
