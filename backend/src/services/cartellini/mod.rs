//! # Cartellino Catalog Service
//!
//! Read-only access to the factory's tag/work-order catalog. The catalog
//! is owned by the wider factory system; nothing in this application
//! creates, mutates or deletes its rows.
//!
//! ## Registered routes
//!
//! *   **`POST /api/cartellini/search`**:
//!     - **Handler**: `search::process`
//!     - **Description**: Multi-criteria search over the catalog. The seven
//!       free-text filters (numero, commessa, articolo, descrizione, linea,
//!       cliente, ordine) are combined with AND, each as a case-insensitive
//!       partial match. At least one filter must be non-blank, otherwise the
//!       request is rejected with 400 before the catalog is touched.
//!
//! *   **`GET /api/cartellini/check/{numero}`**:
//!     - **Handler**: `check::process`
//!     - **Description**: Single-tag validity check used for real-time
//!       validation of manually entered numbers. Absence is never an error:
//!       an unknown number answers `{"valid": false}` with 200.

mod check;
mod search;

use actix_web::web::{get, post, scope};
use actix_web::Scope;
use common::model::cartellino::Cartellino;
use rusqlite::Row;

const API_PATH: &str = "/api/cartellini";

/// Column list shared by every catalog query in this module; keep in sync
/// with `cartellino_from_row`.
pub(crate) const CARTELLINO_COLUMNS: &str =
    "id, numero, commessa, articolo, descrizione, linea, cliente, ordine";

pub(crate) fn cartellino_from_row(row: &Row<'_>) -> rusqlite::Result<Cartellino> {
    Ok(Cartellino {
        id: row.get(0)?,
        numero: row.get(1)?,
        commessa: row.get(2)?,
        articolo: row.get(3)?,
        descrizione: row.get(4)?,
        linea: row.get(5)?,
        cliente: row.get(6)?,
        ordine: row.get(7)?,
    })
}

/// Configures and returns the Actix scope for the catalog routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/search", post().to(search::process))
        .route("/check/{numero}", get().to(check::process))
}
