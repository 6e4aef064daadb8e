use serde::{Deserialize, Serialize};

/// A production work-order tag ("cartellino") as read from the factory
/// catalog. The catalog is owned by the wider factory system; this
/// application only looks tags up and never creates or mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cartellino {
    pub id: i64,
    pub numero: String,
    pub commessa: Option<String>,
    pub articolo: Option<String>,
    pub descrizione: Option<String>,
    pub linea: Option<String>,
    pub cliente: Option<String>,
    pub ordine: Option<String>,
}

/// One page of catalog search results, ordered by article so adjacent rows
/// cluster for display grouping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartellinoPage {
    pub items: Vec<Cartellino>,
    pub total: i64,
    pub total_pages: i64,
}

/// Answer of the single-tag validity check. An unknown number is not an
/// error: it is reported as `valid: false` with no cartellino attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckCartellinoResponse {
    pub valid: bool,
    pub cartellino: Option<Cartellino>,
}
