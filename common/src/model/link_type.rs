use serde::{Deserialize, Serialize};

/// A user-defined category under which tag/lot associations are filed.
/// Types are created on demand and live indefinitely; there is no
/// deletion path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkType {
    pub id: i64,
    pub name: String,
    pub note: Option<String>,
}
