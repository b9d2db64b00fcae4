//! SQLite storage for the development API.
//!
//! - `DbState`: a clonable handle around a single connection, injected into
//!   the Actix application state in `main.rs`.
//! - `schema`: table definitions, created on open.
//! - `seed`: demo data written on first start.

pub mod schema;
pub mod seed;

use rusqlite::Connection;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared database handle.
///
/// The connection is not `Sync`, so every handler takes the mutex for the
/// duration of its queries.
#[derive(Clone)]
pub struct DbState {
    pub conn: Arc<Mutex<Connection>>,
}

impl DbState {
    pub fn open(path: &str) -> rusqlite::Result<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    #[cfg(test)]
    pub fn in_memory() -> rusqlite::Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> rusqlite::Result<Self> {
        schema::create_tables(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}
