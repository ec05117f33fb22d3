//! Binds the listener and serves the router until shutdown.

use crate::config::ServerConfig;
use crate::error::Result;
use crate::routes;

/// Runs the server until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the listener cannot be bound.
pub async fn run(config: ServerConfig) -> Result<()> {
    let app = routes::router(&config)?;
    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    tracing::info!(
        addr = %config.addr,
        cors = config.cors,
        origins = ?config.allowed_origins,
        "Listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
