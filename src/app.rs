// Service wiring: router, listener and the startup sequence

use axum::Router;
use std::{future::Future, net::SocketAddr};
use tokio::{net::TcpListener, signal};
use tracing::info;

use crate::{
    config::Config,
    db,
    error::{StartupError, StartupResult},
    handlers::hello,
    middleware::create_middleware_stack,
};

/// Create the Axum router.
/// There are no routes: the fallback answers every method and path.
pub fn create_router(config: &Config) -> Router {
    Router::new()
        .fallback(hello)
        .layer(create_middleware_stack(config.request_timeout))
}

/// Bind the TCP listener; failure here is fatal for the service.
pub async fn bind(addr: SocketAddr) -> StartupResult<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })
}

/// Serve `router` on an already bound listener until `shutdown` resolves.
/// In-flight requests are allowed to finish.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> StartupResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(StartupError::Serve)
}

/// Full startup sequence: probe (when configured), bind, serve.
///
/// The listener is only bound once the probe has succeeded, so an
/// unreachable database means the port is never taken.
pub async fn run(config: Config) -> StartupResult<()> {
    run_until(config, shutdown_signal()).await
}

/// Same as [`run`] with a caller supplied shutdown future.
pub async fn run_until<F>(config: Config, shutdown: F) -> StartupResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Some(database) = &config.database {
        db::probe(database).await?;
    }

    info!("Service Starting...");
    let router = create_router(&config);

    let addr = config.socket_addr();
    let listener = bind(addr).await?;
    let local_addr = listener.local_addr().unwrap_or(addr);
    info!(addr = %local_addr, "Service Listening...");

    serve(listener, router, shutdown).await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
/// Listens for SIGTERM and SIGINT signals
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, initiating graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM signal, initiating graceful shutdown");
        },
    }
}
