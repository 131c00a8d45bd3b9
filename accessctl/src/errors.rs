use crate::db::errors::DbError;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// A dedicated or pooled connection could not be established
    #[error("Failed to connect to {target}")]
    Connection {
        target: String,
        #[source]
        source: sqlx::Error,
    },

    /// Database operation error
    #[error(transparent)]
    Database(#[from] DbError),

    /// Invalid or inconsistent configuration
    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        Error::Database(DbError::from(err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
