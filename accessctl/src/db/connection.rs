//! Connection provider.
//!
//! Two ways to get a connection:
//!
//! - [`Database::connect`] opens a dedicated connection from static configuration. It never
//!   returns an error: failures are logged with the host, port and database and turned into
//!   `None`.
//! - [`crate::db::pools::get_connection`] leases from the process-wide pool and propagates
//!   driver errors to the caller.
//!
//! Resolvers don't pick either directly; they take a [`ConnectionSource`] so callers decide.
//! Every connection handed out is wrapped in a [`DbConnection`] lease that must be given back
//! with [`DbConnection::release`].

use async_trait::async_trait;
use sqlx::{AnyConnection, Connection};
use sqlx::any::{Any, install_default_drivers};
use sqlx::pool::PoolConnection;
use std::ops::{Deref, DerefMut};
use tracing::{debug, error, instrument, warn};

use crate::config::DatabaseConfig;
use crate::errors::{Error, Result};

/// A leased database connection, either dedicated or borrowed from a pool.
///
/// Derefs to [`AnyConnection`] so repositories can run queries on it directly.
pub enum DbConnection {
    Dedicated(AnyConnection),
    Pooled(PoolConnection<Any>),
}

impl DbConnection {
    /// Give the connection back.
    ///
    /// Dedicated connections are closed gracefully, pooled ones return to their pool. A failure
    /// while closing is logged and otherwise ignored, so it can never replace the result of the
    /// work done on the connection. Dropping a lease without calling this still frees it, just
    /// without the graceful shutdown.
    pub async fn release(self) {
        match self {
            DbConnection::Dedicated(conn) => {
                if let Err(e) = conn.close().await {
                    warn!(error = %e, "Failed to close database connection");
                }
            }
            DbConnection::Pooled(conn) => drop(conn),
        }
    }

    pub fn is_pooled(&self) -> bool {
        matches!(self, DbConnection::Pooled(_))
    }
}

impl Deref for DbConnection {
    type Target = AnyConnection;

    fn deref(&self) -> &Self::Target {
        match self {
            DbConnection::Dedicated(conn) => conn,
            DbConnection::Pooled(conn) => &**conn,
        }
    }
}

impl DerefMut for DbConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self {
            DbConnection::Dedicated(conn) => conn,
            DbConnection::Pooled(conn) => &mut **conn,
        }
    }
}

impl std::fmt::Debug for DbConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbConnection::Dedicated(_) => f.write_str("DbConnection::Dedicated"),
            DbConnection::Pooled(_) => f.write_str("DbConnection::Pooled"),
        }
    }
}

/// Anything that can hand out a connection for a single unit of work.
///
/// Returning `None` means "no connection available"; the implementation is responsible for
/// reporting why.
#[async_trait]
pub trait ConnectionSource: Send + Sync {
    async fn acquire(&self) -> Option<DbConnection>;
}

/// Opens one dedicated connection per call from static configuration.
#[derive(Debug, Clone, Default)]
pub struct Database {
    config: DatabaseConfig,
}

impl Database {
    /// Use the given configuration, or the defaults (`root@localhost:3306/control_acceso`).
    pub fn new(config: Option<DatabaseConfig>) -> Self {
        Self {
            config: config.unwrap_or_default(),
        }
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Open a connection, returning the driver error on failure.
    pub async fn try_connect(&self) -> Result<AnyConnection> {
        install_default_drivers();
        let url = self.config.connection_url()?;
        AnyConnection::connect(&url).await.map_err(|source| Error::Connection {
            target: self.config.target(),
            source,
        })
    }

    /// Open a connection, logging and swallowing any failure.
    #[instrument(skip(self), fields(target = %self.config.target()))]
    pub async fn connect(&self) -> Option<DbConnection> {
        match self.try_connect().await {
            Ok(conn) => {
                debug!("Opened database connection");
                Some(DbConnection::Dedicated(conn))
            }
            Err(e) => {
                let endpoint = self.config.endpoint();
                error!(
                    host = %endpoint.host,
                    port = endpoint.port,
                    database = %endpoint.database,
                    error = %format!("{:#}", anyhow::Error::from(e)),
                    "Failed to connect to database ({endpoint})"
                );
                None
            }
        }
    }
}

#[async_trait]
impl ConnectionSource for Database {
    async fn acquire(&self) -> Option<DbConnection> {
        self.connect().await
    }
}
