//! SQLite access shared across the actix workers.
//!
//! A single bundled-SQLite connection is wrapped in an async mutex and
//! injected into the application as `web::Data<Db>`. Every service locks
//! the connection for the duration of one request, so each call observes
//! a consistent snapshot; the `(tag_id, type_id, lot)` uniqueness
//! invariant of the link store rides on the unique index below rather
//! than on application-level read-then-write.

use std::sync::Arc;

use rusqlite::Connection;
use tokio::sync::{Mutex, MutexGuard};

/// Schema applied on every open. `cartellini` is the tag/work-order
/// catalog owned by the wider factory system: this application only reads
/// it, the table is created here so a fresh install has somewhere to read
/// from.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS cartellini (
    id          INTEGER PRIMARY KEY,
    numero      TEXT NOT NULL UNIQUE,
    commessa    TEXT,
    articolo    TEXT,
    descrizione TEXT,
    linea       TEXT,
    cliente     TEXT,
    ordine      TEXT
);

CREATE TABLE IF NOT EXISTS link_types (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    note TEXT
);

CREATE TABLE IF NOT EXISTS links (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    tag_id     INTEGER NOT NULL,
    type_id    INTEGER NOT NULL REFERENCES link_types(id),
    lot        TEXT NOT NULL,
    note       TEXT,
    created_at TEXT NOT NULL,
    UNIQUE (tag_id, type_id, lot)
);

CREATE INDEX IF NOT EXISTS idx_links_lot ON links(lot);
CREATE INDEX IF NOT EXISTS idx_links_tag ON links(tag_id);
";

/// Clonable handle to the tracking database.
#[derive(Clone)]
pub struct Db {
    conn: Arc<Mutex<Connection>>,
}

impl Db {
    /// Opens (or creates) the database file and applies the schema.
    pub fn open(path: &str) -> Result<Self, rusqlite::Error> {
        Self::from_connection(Connection::open(path)?)
    }

    /// In-memory database, used by the test suite.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, rusqlite::Error> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Locks the connection for one request.
    pub async fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().await
    }
}
