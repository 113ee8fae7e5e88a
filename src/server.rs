//! HTTP server initialization and runtime setup.
//!
//! Handles backend selection, router assembly and the Axum server lifecycle.

use crate::config::{Config, StorageConfig};
use crate::domain::repositories::RedirectRepository;
use crate::infrastructure::persistence::{
    InMemoryRedirectRepository, MongoRedirectRepository, RedisRedirectRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Connects the storage backend selected by configuration.
///
/// # Errors
///
/// Returns an error if the backend cannot be reached within its timeout.
pub async fn connect_repository(storage: &StorageConfig) -> Result<Arc<dyn RedirectRepository>> {
    let repository: Arc<dyn RedirectRepository> = match storage {
        StorageConfig::Mongo {
            url,
            database,
            timeout,
        } => Arc::new(
            MongoRedirectRepository::connect(url, database, *timeout)
                .await
                .context("Failed to connect to MongoDB")?,
        ),
        StorageConfig::Redis { url, timeout } => Arc::new(
            RedisRedirectRepository::connect(url, *timeout)
                .await
                .context("Failed to connect to Redis")?,
        ),
        StorageConfig::Memory => {
            tracing::warn!("Using in-memory storage; redirects are lost on restart");
            Arc::new(InMemoryRedirectRepository::new())
        }
    };

    tracing::info!(backend = repository.backend_name(), "Storage ready");
    Ok(repository)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage backend selected by `URL_DB`
/// - Redirect service and router
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Backend connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = connect_repository(&config.storage).await?;
    let state = AppState::new(repository);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    serve(listener, state, shutdown_signal()).await
}

/// Serves requests until the listener fails or `shutdown` resolves.
///
/// The listener runs as its own task. Once `shutdown` completes it stops
/// accepting connections and waits for in-flight requests to finish.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()>,
{
    let app = app_router(state);
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let mut server = tokio::spawn(async move {
        axum::serve(
            listener,
            ServiceExt::<Request>::into_make_service(app),
        )
        .with_graceful_shutdown(async move {
            let _ = stop_rx.await;
        })
        .await
    });

    tokio::select! {
        result = &mut server => {
            result.context("Server task panicked")?.context("Server error")?;
            tracing::warn!("Server stopped without a shutdown signal");
        }
        () = shutdown => {
            tracing::info!("Shutdown signal received, draining connections");
            let _ = stop_tx.send(());
            server
                .await
                .context("Server task panicked")?
                .context("Server error")?;
            tracing::info!("Server stopped");
        }
    }

    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
