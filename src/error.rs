use std::{io, net::SocketAddr, time::Duration};
use thiserror::Error;

/// Failures of the startup database probe.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("TLS connector creation failed: {0}")]
    Tls(#[from] native_tls::Error),

    #[error("Connection pool creation failed: {0}")]
    CreatePool(#[from] deadpool_postgres::CreatePoolError),

    #[error("Database connection failed")]
    Connect(#[source] deadpool_postgres::PoolError),

    #[error("Database ping failed: {0}")]
    Ping(#[from] tokio_postgres::Error),

    #[error("Database did not respond within {0:?}")]
    Timeout(Duration),
}

/// Anything that stops the service from reaching the serving state,
/// or ends it abnormally afterwards.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Database probe failed: {0}")]
    Probe(#[from] ProbeError),

    #[error("Failed to bind to address {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] io::Error),
}

// Pool error mapping
impl ProbeError {
    pub fn from_pool(err: deadpool_postgres::PoolError, timeout: Duration) -> Self {
        match err {
            deadpool_postgres::PoolError::Timeout(kind) => {
                tracing::warn!("Database connection timed out ({:?})", kind);
                ProbeError::Timeout(timeout)
            }
            other => {
                tracing::error!("Database connection error: {}", other);
                ProbeError::Connect(other)
            }
        }
    }
}

// Result type alias for convenience
pub type StartupResult<T> = Result<T, StartupError>;
