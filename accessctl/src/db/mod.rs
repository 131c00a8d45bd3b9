//! Database layer for read-only data access.
//!
//! This module implements the data access layer using SQLx's `Any` driver, so the same queries
//! run against MySQL in production and SQLite in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  Resolvers   │  (crate::auth - degrade failures to empty/None)
//! └──────┬───────┘
//!        │ ConnectionSource
//!        ↓
//! ┌──────────────┐
//! │ Repositories │  (db::handlers - one query each)
//! └──────┬───────┘
//!        │
//!        ↓
//! ┌──────────────┐
//! │    Models    │  (db::models - row structs)
//! └──────┬───────┘
//!        │
//!        ↓
//! ┌──────────────┐
//! │ MySQL/SQLite │
//! └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`connection`]: dedicated connections, the [`DbConnection`] lease and [`ConnectionSource`]
//! - [`pools`]: the lazily created process-wide pool
//! - [`handlers`]: repositories issuing the read queries
//! - [`models`]: row structures matching table schemas
//! - [`errors`]: database-specific error types
//!
//! This layer never writes: there are no transactions and no migrations here. The schema is
//! owned by the application that writes to it.

pub mod connection;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod pools;

pub use connection::{ConnectionSource, Database, DbConnection};
pub use pools::PooledSource;
