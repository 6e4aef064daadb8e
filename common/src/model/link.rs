use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The core association row: one cartellino filed under one type against
/// one shipment lot. The `(tag_id, type_id, lot)` triple is unique in the
/// store; `lot` is the only field that can change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: i64,
    pub tag_id: i64,
    pub type_id: i64,
    pub lot: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Outcome of a bulk creation: only newly inserted rows are counted,
/// silently skipped duplicates are not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLinksResponse {
    pub created: i64,
}
