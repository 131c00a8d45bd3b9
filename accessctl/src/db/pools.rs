//! Shared connection pool.
//!
//! One pool per process, created lazily on first use with the name and size from
//! [`PoolSettings`] (`mypool`, 5 connections by default). Unlike [`Database::connect`], leasing
//! from the pool propagates errors: an unparsable URL, an exhausted pool or an unreachable
//! server all come back as `Err`.
//!
//! # Usage
//!
//! ```ignore
//! // Lease directly, handling errors yourself
//! let mut conn = accessctl::db::pools::get_connection(&config).await?;
//!
//! // Or hand the pool to the resolvers
//! let source = PooledSource::shared(&config)?;
//! let permissions = accessctl::auth::permissions::permissions_for(&source, user_id).await;
//! ```
//!
//! [`Database::connect`]: crate::db::connection::Database::connect

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use sqlx::AnyPool;
use sqlx::any::{Any, AnyPoolOptions, install_default_drivers};
use sqlx::pool::PoolConnection;
use tracing::{error, info, instrument};

use crate::config::{Config, DatabaseConfig, PoolSettings};
use crate::db::connection::{ConnectionSource, DbConnection};
use crate::errors::{Error, Result};

static SHARED_POOL: OnceCell<AnyPool> = OnceCell::new();

/// Build a pool without opening any connection yet.
///
/// Must be called from within a Tokio runtime.
pub fn build_pool(database: &DatabaseConfig, settings: &PoolSettings) -> Result<AnyPool> {
    install_default_drivers();
    let url = database.connection_url()?;

    AnyPoolOptions::new()
        .max_connections(settings.size)
        .min_connections(settings.min_connections)
        .acquire_timeout(settings.acquire_timeout())
        .idle_timeout(settings.idle_timeout())
        .max_lifetime(settings.max_lifetime())
        .connect_lazy(&url)
        .map_err(|source| Error::Connection {
            target: database.target(),
            source,
        })
}

/// The process-wide pool, created from `config` on the first call.
///
/// Concurrent first callers race on a single initialisation; later calls ignore `config` and
/// return the existing pool.
pub fn shared_pool(config: &Config) -> Result<&'static AnyPool> {
    SHARED_POOL.get_or_try_init(|| {
        info!(
            pool = %config.pool.name,
            size = config.pool.size,
            target = %config.database.target(),
            "Creating shared connection pool"
        );
        build_pool(&config.database, &config.pool)
    })
}

/// Lease a connection from the shared pool.
#[instrument(skip(config), fields(pool = %config.pool.name), err)]
pub async fn get_connection(config: &Config) -> Result<PoolConnection<Any>> {
    let pool = shared_pool(config)?;
    Ok(pool.acquire().await?)
}

/// A [`ConnectionSource`] backed by a pool.
///
/// Acquisition failures are logged and reported as `None`, so resolvers degrade the same way
/// they do with [`crate::db::connection::Database`].
#[derive(Debug, Clone)]
pub struct PooledSource {
    pool: AnyPool,
}

impl PooledSource {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// Wrap the process-wide pool.
    pub fn shared(config: &Config) -> Result<Self> {
        Ok(Self::new(shared_pool(config)?.clone()))
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }
}

#[async_trait]
impl ConnectionSource for PooledSource {
    async fn acquire(&self) -> Option<DbConnection> {
        match self.pool.acquire().await {
            Ok(conn) => Some(DbConnection::Pooled(conn)),
            Err(e) => {
                error!(error = %e, "Failed to acquire pooled database connection");
                None
            }
        }
    }
}
