//! # Link Store Service
//!
//! The core of the tracking subsystem: associations between production
//! cartellini and shipment lot identifiers, filed under a user-defined
//! relationship type. One row per `(tag_id, type_id, lot)` triple; the
//! triple is unique at the storage layer and a duplicate creation attempt
//! is absorbed silently rather than reported as a conflict.
//!
//! ## Registered routes
//!
//! *   **`POST /api/links`** — `create::process`: bulk creation of the
//!     cross product of a tag set and a lot set under one type.
//! *   **`GET /api/links/tree`** — `tree::process`: reconstructs the
//!     tag → type → lots hierarchy for a free-text query, `"*"` meaning
//!     every link, capped and paginated over top-level tag groups.
//! *   **`PUT /api/links/{link_id}/lot`** — `update_lot::process`:
//!     in-place edit of one link's lot value.
//! *   **`DELETE /api/links/{link_id}`** — `delete::process`: removes
//!     exactly one link row.

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod tree;
pub(crate) mod update_lot;

use actix_web::web::{self, scope};
use actix_web::Scope;
use common::model::link::Link;
use rusqlite::Row;

const API_PATH: &str = "/api/links";

/// Maps `id, tag_id, type_id, lot, note, created_at` columns to a `Link`.
pub(crate) fn link_from_row(row: &Row<'_>) -> rusqlite::Result<Link> {
    Ok(Link {
        id: row.get(0)?,
        tag_id: row.get(1)?,
        type_id: row.get(2)?,
        lot: row.get(3)?,
        note: row.get(4)?,
        created_at: row.get(5)?,
    })
}

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", web::post().to(create::process))
        .route("/tree", web::get().to(tree::process))
        .route("/{link_id}/lot", web::put().to(update_lot::process))
        .route("/{link_id}", web::delete().to(delete::process))
}
