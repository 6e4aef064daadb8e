//! Shared fixtures for the service tests: in-memory databases and a small
//! seeded slice of the factory catalog.

use rusqlite::params;

use crate::db::Db;

pub async fn empty_db() -> Db {
    Db::open_in_memory().expect("in-memory database")
}

/// An in-memory database with a handful of catalog rows: two Rossi
/// cartellini on commessa C-2024-01, one Bianchi on C-2024-02 and an
/// older Verdi one outside 2024.
pub async fn seeded_db() -> Db {
    let db = empty_db().await;
    {
        let conn = db.lock().await;
        let rows = [
            (101, "C-0101", "C-2024-01", "ART-A", "Telaio verniciato", "L1", "Rossi Srl", "ORD-7"),
            (102, "C-0102", "C-2024-01", "ART-B", "Telaio grezzo", "L1", "Rossi Srl", "ORD-7"),
            (205, "C-0205", "C-2024-02", "ART-C", "Cerniera inox", "L2", "Bianchi SpA", "ORD-12"),
            (300, "C-0300", "C-2023-09", "ART-A", "Telaio verniciato", "L3", "Verdi & C.", "ORD-2"),
        ];
        for (id, numero, commessa, articolo, descrizione, linea, cliente, ordine) in rows {
            conn.execute(
                "INSERT INTO cartellini (id, numero, commessa, articolo, descrizione, linea, cliente, ordine)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![id, numero, commessa, articolo, descrizione, linea, cliente, ordine],
            )
            .expect("seed cartellino");
        }
    }
    db
}

/// Inserts one bare catalog row (number only).
pub async fn seed_cartellino(db: &Db, id: i64, numero: &str) {
    let conn = db.lock().await;
    conn.execute(
        "INSERT INTO cartellini (id, numero) VALUES (?1, ?2)",
        params![id, numero],
    )
    .expect("seed cartellino");
}

/// Inserts a relationship type and returns its id.
pub async fn seed_type(db: &Db, name: &str) -> i64 {
    let conn = db.lock().await;
    conn.execute("INSERT INTO link_types (name) VALUES (?1)", params![name])
        .expect("seed link type");
    conn.last_insert_rowid()
}

pub async fn count_links(db: &Db) -> i64 {
    let conn = db.lock().await;
    conn.query_row("SELECT COUNT(*) FROM links", [], |row| row.get(0))
        .expect("count links")
}
