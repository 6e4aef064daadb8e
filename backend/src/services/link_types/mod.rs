//! # Relationship Type Registry
//!
//! The small set of user-defined categories ("types") under which
//! cartellino/lot links are filed. Types are created on demand from the
//! tracking screen and are never deleted.
//!
//! ## Registered routes
//!
//! *   **`GET /api/link_types`** — `list::process`: every type, in
//!     insertion order (the order the tracking screen displays them in).
//! *   **`POST /api/link_types`** — `create::process`: persists a new type
//!     from `{name, note?}`. A blank name is rejected with 400; name
//!     uniqueness is not enforced.

pub(crate) mod create;
pub(crate) mod list;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/link_types";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
}
