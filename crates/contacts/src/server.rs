//! Server lifecycle: open the store, optionally seed it, serve until a shutdown signal.

use std::sync::Arc;

use anyhow::Context;
use contacts_core::{ContactService, SqliteContactStore};
use tokio::net::TcpListener;
use tracing::info;

use crate::{config::Config, db, http, seed};

/// Run the service with a resolved configuration.
///
/// Returns once a SIGINT or SIGTERM has been received and in-flight
/// requests have drained.
///
/// # Errors
///
/// Returns error if the database cannot be opened, seeding fails, or the
/// listener cannot bind
pub async fn run(config: Config) -> anyhow::Result<()> {
    let pool = db::connect(&config.database_url).await?;
    let store = SqliteContactStore::new(pool)
        .await
        .context("Failed to initialize contact store")?;
    let service = ContactService::new(Arc::new(store));

    if config.seed {
        seed::seed_sample_data(&service)
            .await
            .context("Failed to load sample contacts")?;
    }

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    let addr = listener.local_addr()?;
    info!(addr = %addr, database = %config.database_url, "Contacts service listening");

    axum::serve(listener, http::router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Contacts service stopped");
    Ok(())
}

/// Resolve on SIGINT or SIGTERM (Ctrl-C only on non-Unix platforms).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to setup SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT"),
        () = terminate => info!("Received SIGTERM"),
    }
}
