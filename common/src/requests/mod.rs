use serde::{Deserialize, Serialize};

/// The seven free-text criteria of the cartellino search. Present,
/// non-blank fields are combined with AND; each is a case-insensitive
/// partial match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default)]
    pub numero: Option<String>,
    #[serde(default)]
    pub commessa: Option<String>,
    #[serde(default)]
    pub articolo: Option<String>,
    #[serde(default)]
    pub descrizione: Option<String>,
    #[serde(default)]
    pub linea: Option<String>,
    #[serde(default)]
    pub cliente: Option<String>,
    #[serde(default)]
    pub ordine: Option<String>,
}

impl SearchFilters {
    /// True when no criterion carries anything but whitespace. Such a
    /// request must be rejected before touching the catalog.
    pub fn is_empty(&self) -> bool {
        [
            &self.numero,
            &self.commessa,
            &self.articolo,
            &self.descrizione,
            &self.linea,
            &self.cliente,
            &self.ordine,
        ]
        .iter()
        .all(|f| f.as_deref().is_none_or(|v| v.trim().is_empty()))
    }
}

/// Request payload for the cartellino search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCartelliniRequest {
    pub filters: SearchFilters,
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub page_size: Option<i64>,
}

/// Request payload for creating a relationship type on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTypeRequest {
    pub name: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Request payload for bulk link creation: the cross product of
/// `tag_ids` and `lots` is materialized under `type_id`. The lot list
/// comes from free text split on line breaks, so entries are trimmed and
/// blanks discarded again server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLinksRequest {
    pub type_id: i64,
    pub lots: Vec<String>,
    pub tag_ids: Vec<i64>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Request payload for the in-place lot edit of a single link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLotRequest {
    pub lot: String,
}
