//! Test fixtures: a seeded SQLite database reached through the same `Any` driver as MySQL.
//!
//! Seed data:
//!
//! | user | role       | status   | permissions            |
//! |------|------------|----------|------------------------|
//! | 1    | admin      | activo   | mod1.read, mod2.write  |
//! | 2    | admin      | inactivo | -                      |
//! | 3    | invitado   | activo   | -                      |
//! | 4    | auditor    | activo   | reportes.ver           |

use sqlx::{AnyConnection, Connection};
use sqlx::any::install_default_drivers;
use std::io;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use crate::config::DatabaseConfig;
use crate::db::{Database, DbConnection};
use crate::types::UserId;

pub const ADMIN_ID: UserId = 1;
pub const INACTIVE_ID: UserId = 2;
pub const NO_PERMISSIONS_ID: UserId = 3;
pub const AUDITOR_ID: UserId = 4;

const SCHEMA: &[&str] = &[
    "CREATE TABLE roles (id INTEGER PRIMARY KEY, nombre TEXT NOT NULL, descripcion TEXT)",
    "CREATE TABLE permisos (id INTEGER PRIMARY KEY, nombre TEXT NOT NULL, modulo TEXT NOT NULL)",
    "CREATE TABLE rol_permisos (rol_id INTEGER NOT NULL, permiso_id INTEGER NOT NULL, PRIMARY KEY (rol_id, permiso_id))",
    "CREATE TABLE usuarios (
        id INTEGER PRIMARY KEY,
        nombre TEXT NOT NULL,
        email TEXT,
        password_hash TEXT NOT NULL,
        rol_id INTEGER NOT NULL,
        estado TEXT NOT NULL DEFAULT 'activo'
    )",
];

const SEED: &[&str] = &[
    "INSERT INTO roles (id, nombre, descripcion) VALUES
        (1, 'admin', 'Acceso total'),
        (2, 'invitado', NULL),
        (3, 'auditor', 'Solo lectura de reportes')",
    "INSERT INTO permisos (id, nombre, modulo) VALUES
        (1, 'read', 'mod1'),
        (2, 'write', 'mod2'),
        (3, 'delete', 'mod9'),
        (4, 'ver', 'reportes')",
    "INSERT INTO rol_permisos (rol_id, permiso_id) VALUES (1, 1), (1, 2), (3, 4)",
    // password_hash is SHA-256 of 'password123'
    "INSERT INTO usuarios (id, nombre, email, password_hash, rol_id, estado) VALUES
        (1, 'Ana Torres', 'ana@example.com', 'ef92b778bafe771e89245b89ecbc08a44a4e166c06659911881f383d4473e94f', 1, 'activo'),
        (2, 'Luis Vega', 'luis@example.com', 'ef92b778bafe771e89245b89ecbc08a44a4e166c06659911881f383d4473e94f', 1, 'inactivo'),
        (3, 'Eva Ruiz', NULL, 'ef92b778bafe771e89245b89ecbc08a44a4e166c06659911881f383d4473e94f', 2, 'activo'),
        (4, 'Iker Sola', 'iker@example.com', 'ef92b778bafe771e89245b89ecbc08a44a4e166c06659911881f383d4473e94f', 3, 'activo')",
];

/// A seeded database living as long as this value.
pub struct TestDatabase {
    _dir: TempDir,
    pub config: DatabaseConfig,
}

impl TestDatabase {
    pub fn database(&self) -> Database {
        Database::new(Some(self.config.clone()))
    }

    pub async fn connect(&self) -> DbConnection {
        self.database().connect().await.expect("test database should be reachable")
    }

    /// Run a statement against the fixture, e.g. to reshape seed data.
    pub async fn execute(&self, statement: &str) {
        let mut conn = self.connect().await;
        sqlx::query(statement).execute(&mut *conn).await.unwrap();
        conn.release().await;
    }

    /// Break the schema so queries touching `table` fail.
    pub async fn drop_table(&self, table: &str) {
        self.execute(&format!("DROP TABLE {table}")).await;
    }

    /// Store every text column as a blob, the way MySQL reports `TEXT` columns.
    pub async fn store_text_as_blobs(&self) {
        for statement in [
            "UPDATE usuarios SET nombre = CAST(nombre AS BLOB), email = CAST(email AS BLOB)",
            "UPDATE roles SET nombre = CAST(nombre AS BLOB), descripcion = CAST(descripcion AS BLOB)",
            "UPDATE permisos SET nombre = CAST(nombre AS BLOB), modulo = CAST(modulo AS BLOB)",
        ] {
            self.execute(statement).await;
        }
    }
}

pub async fn create_test_database() -> TestDatabase {
    install_default_drivers();
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("control_acceso.db").display());

    let mut conn = AnyConnection::connect(&url).await.unwrap();
    for statement in SCHEMA.iter().chain(SEED) {
        sqlx::query(statement).execute(&mut conn).await.unwrap();
    }
    conn.close().await.unwrap();

    TestDatabase {
        _dir: dir,
        config: DatabaseConfig {
            url: Some(url),
            ..Default::default()
        },
    }
}

/// Config pointing at a SQLite file in a directory that doesn't exist.
pub fn unreachable_database() -> (TempDir, DatabaseConfig) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("missing").join("control_acceso.db").display());
    let config = DatabaseConfig {
        url: Some(url),
        ..Default::default()
    };
    (dir, config)
}

/// Formatted log output collected in memory.
///
/// Install [`LogCapture::subscriber`] with `tracing::subscriber::set_default` in a
/// current-thread test, then assert on [`LogCapture::contents`].
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
        let writer = self.clone();
        tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::verify_string;

    #[tokio::test]
    async fn test_seeded_passwords_verify() {
        let fixture = create_test_database().await;
        let mut conn = fixture.connect().await;

        let hash: String = sqlx::query_scalar("SELECT password_hash FROM usuarios WHERE id = ?")
            .bind(ADMIN_ID)
            .fetch_one(&mut *conn)
            .await
            .unwrap();
        conn.release().await;

        assert!(verify_string("password123", &hash));
        assert!(!verify_string("password124", &hash));
    }

    #[tokio::test]
    async fn test_store_text_as_blobs() {
        let fixture = create_test_database().await;
        fixture.store_text_as_blobs().await;
        let mut conn = fixture.connect().await;

        let kinds: Vec<String> = sqlx::query_scalar(
            "SELECT typeof(descripcion) FROM roles WHERE descripcion IS NOT NULL ORDER BY id",
        )
        .fetch_all(&mut *conn)
        .await
        .unwrap();
        conn.release().await;

        assert_eq!(kinds, vec!["blob".to_string(), "blob".to_string()]);
    }
}
