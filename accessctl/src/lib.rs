//! # accessctl: read-only access-control data layer
//!
//! `accessctl` is the data-access layer behind a web application's access-control decisions. It
//! opens database connections, hashes and verifies credentials, and resolves which permissions a
//! user holds through its role. It never writes to the database.
//!
//! ## Overview
//!
//! The schema is the classic role-based one: every user in `usuarios` points at one row in
//! `roles`, and `rol_permisos` links roles to rows in `permisos`. A permission is exposed as
//! `"<module>.<name>"`. Only users whose `estado` is `activo` resolve to anything.
//!
//! Read failures degrade instead of propagating: when the database can't be reached or a query
//! fails, a user has no permissions and there is no current user. An access-control decision
//! point built on top therefore fails closed without having to handle errors.
//!
//! ### Core Components
//!
//! The **database layer** ([`db`]) provides dedicated connections ([`db::Database`]), a lazily
//! created process-wide pool ([`db::pools`]) and the repositories issuing the two read queries.
//! Both connection kinds implement [`db::ConnectionSource`], which is what the resolvers take.
//!
//! The **authorization layer** ([`auth`]) resolves permissions and the current user, and hashes
//! passwords with SHA-256.
//!
//! The **time helper** ([`time`]) gives "now" in the configured zone, falling back to local time.
//!
//! ## Quick Start
//!
//! ```no_run
//! use accessctl::{auth::AccessControl, db::Database, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load_default()?;
//!     accessctl::telemetry::init_telemetry()?;
//!
//!     let access = AccessControl::new(Database::new(Some(config.database.clone())));
//!     if access.has_permission(1, "usuarios.ver").await {
//!         println!("allowed");
//!     }
//!
//!     println!("now: {:?}", accessctl::time::now(&config.time));
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options.

pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod telemetry;
pub mod time;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use errors::{Error, Result};
