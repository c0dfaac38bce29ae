use crate::application::integrity::PaymentIntegrityService;
use crate::config::Config;
use crate::interfaces::http::router;
use miette::{IntoDiagnostic, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal::{self, ctrl_c};
use tracing::info;

/// Builds the service from `config` and serves it until SIGINT or SIGTERM.
pub async fn run(config: Config) -> Result<()> {
    let service = Arc::new(PaymentIntegrityService::new(
        Box::new(config.credential_store()),
        config.service_options(),
    ));
    let app = router(service);

    let address = config.address();
    let listener = TcpListener::bind(&address).await.into_diagnostic()?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_diagnostic()?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
