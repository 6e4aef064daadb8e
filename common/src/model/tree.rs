//! The tag → type → lots hierarchy reconstructed on demand from link rows
//! matching a search query. The tree is a read-only snapshot: editing or
//! deleting a link invalidates any previously returned tree and the caller
//! re-queries to see current state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single lot entry inside a type group, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotEntry {
    pub id: i64,
    pub lot: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// All lots a tag holds under one type, sorted by type name across groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeGroup {
    pub type_id: i64,
    pub type_name: String,
    pub lots: Vec<LotEntry>,
}

/// One top-level group per distinct tag, with the tag's catalog attributes
/// where the catalog still knows the tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagGroup {
    pub tag_id: i64,
    pub numero: Option<String>,
    pub commessa: Option<String>,
    pub articolo: Option<String>,
    pub descrizione: Option<String>,
    pub types: Vec<TypeGroup>,
}

/// One page of the assembled tree. Pagination counts top-level tag groups;
/// `total` counts matching link rows before the retrieval cap, and
/// `truncated` reports whether the cap cut the match set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreePage {
    pub tree: Vec<TagGroup>,
    pub total: i64,
    pub total_pages: i64,
    pub truncated: bool,
}
