use crate::config::DatabaseConfig;
use crate::error::ProbeError;
use deadpool_postgres::{Config, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime, Timeouts};
use native_tls::TlsConnector;
use postgres_native_tls::MakeTlsConnector;
use std::time::Duration;
use tracing::{error, info};

/// Verifies that the configured PostgreSQL server is reachable before the
/// service starts accepting traffic.
///
/// A single-connection pool is created, one connection is opened and pinged
/// with `SELECT 1`, and the pool is closed again whatever the outcome. The
/// connection is never retained past this call.
pub async fn probe(config: &DatabaseConfig) -> Result<(), ProbeError> {
    info!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        ssl_mode = %config.ssl_mode,
        "Probing database connectivity"
    );

    let pool = create_pool(config)?;
    let outcome = ping(&pool, config.connect_timeout).await;

    // Release before surfacing any failure
    pool.close();

    outcome?;
    info!("Successfully connected!");
    Ok(())
}

/// Builds a deadpool pool bounded to one connection, with the connect
/// timeout applied to both the socket connect and pool acquisition.
fn create_pool(config: &DatabaseConfig) -> Result<Pool, ProbeError> {
    let mut pg_config = Config::new();

    // The key-value descriptor carries host, credentials, database and sslmode
    pg_config.url = Some(config.to_connection_string());
    pg_config.connect_timeout = Some(config.connect_timeout);

    pg_config.manager = Some(ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    });

    let mut pool_config = PoolConfig::new(1);
    pool_config.timeouts = Timeouts {
        wait: Some(config.connect_timeout),
        create: Some(config.connect_timeout),
        recycle: Some(config.connect_timeout),
    };
    pg_config.pool = Some(pool_config);

    let tls_connector = TlsConnector::builder().build().map_err(|e| {
        error!("Failed to create TLS connector: {}", e);
        ProbeError::from(e)
    })?;
    let tls = MakeTlsConnector::new(tls_connector);

    pg_config.create_pool(Some(Runtime::Tokio1), tls).map_err(|e| {
        error!("Failed to create connection pool: {}", e);
        ProbeError::from(e)
    })
}

/// Opens a connection and runs the liveness query within `timeout`.
async fn ping(pool: &Pool, timeout: Duration) -> Result<(), ProbeError> {
    let client = pool
        .get()
        .await
        .map_err(|e| ProbeError::from_pool(e, timeout))?;

    match tokio::time::timeout(timeout, client.simple_query("SELECT 1")).await {
        Ok(Ok(_)) => Ok(()),
        Ok(Err(e)) => {
            error!("Database liveness check failed: {}", e);
            Err(ProbeError::from(e))
        }
        Err(_) => {
            error!("Database liveness check timed out after {:?}", timeout);
            Err(ProbeError::Timeout(timeout))
        }
    }
}
