//! Web server

use crate::cli;
use crate::error::ServerError;

use std::{net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use axum::ServiceExt;
use axum_server::{tls_rustls::RustlsConfig, Handle};
use expanduser::expanduser;
use tokio::signal;

/// Serve the energy statistics service
///
/// Returns once the server has shut down, or with an error if it could not be started.
///
/// # Arguments
///
/// * `args`: Command line arguments
/// * `service`: The [crate::app::Service] to serve
pub async fn serve(
    args: &cli::CommandLineArgs,
    service: crate::app::Service,
) -> Result<(), ServerError> {
    let address = format!("{}:{}", args.host, args.port);
    let addr =
        SocketAddr::from_str(&address).map_err(|source| ServerError::InvalidAddress {
            address,
            source,
        })?;

    let tls_config = if args.https {
        let cert_file = resolve_tls_file(&args.cert_file)?;
        let key_file = resolve_tls_file(&args.key_file)?;
        Some(
            RustlsConfig::from_pem_file(cert_file, key_file)
                .await
                .map_err(ServerError::TlsConfig)?,
        )
    } else {
        None
    };

    // Catch ctrl+c and try to shutdown gracefully
    let handle = Handle::new();
    tokio::spawn(shutdown_signal(
        handle.clone(),
        args.graceful_shutdown_timeout,
    ));

    let make_service = service.into_make_service();
    match tls_config {
        Some(tls_config) => {
            tracing::info!("Server running on https://{}", addr);
            axum_server::bind_rustls(addr, tls_config)
                .handle(handle)
                .serve(make_service)
                .await
        }
        None => {
            tracing::info!("Server running on http://{}", addr);
            axum_server::bind(addr)
                .handle(handle)
                .serve(make_service)
                .await
        }
    }
    .map_err(ServerError::Serve)
}

/// Expand `~` in a TLS file path and check that the file exists.
fn resolve_tls_file(path: &str) -> Result<PathBuf, ServerError> {
    expanduser(path)
        .and_then(|expanded| expanded.canonicalize())
        .map_err(|source| ServerError::TlsFile {
            path: path.to_string(),
            source,
        })
}

/// Graceful shutdown handler
///
/// Installs signal handlers to catch Ctrl-C or SIGTERM and trigger a graceful shutdown.
async fn shutdown_signal(handle: Handle, timeout: u64) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("signal received, starting graceful shutdown");
    handle.graceful_shutdown(Some(Duration::from_secs(timeout)));
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::app;
    use crate::app_state::AppState;
    use crate::dataset::Dataset;

    use clap::Parser;
    use std::sync::Arc;

    fn test_service() -> app::Service {
        app::service_with_state(Arc::new(AppState::with_dataset(Dataset::default())))
    }

    #[tokio::test]
    async fn invalid_host() {
        let args = cli::CommandLineArgs::parse_from(["energy-stats", "--host", "not a host"]);
        let error = serve(&args, test_service()).await.unwrap_err();
        assert!(
            matches!(error, ServerError::InvalidAddress { .. }),
            "error: {error:?}"
        );
    }

    #[tokio::test]
    async fn missing_tls_file() {
        let args = cli::CommandLineArgs::parse_from([
            "energy-stats",
            "--https",
            "--cert-file",
            "/nonexistent/cert.pem",
        ]);
        let error = serve(&args, test_service()).await.unwrap_err();
        match error {
            ServerError::TlsFile { path, .. } => assert_eq!("/nonexistent/cert.pem", path),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
