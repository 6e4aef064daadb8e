use actix_web::{web, HttpResponse};
use common::model::cartellino::{Cartellino, CartellinoPage};
use common::requests::{SearchCartelliniRequest, SearchFilters};
use rusqlite::params_from_iter;

use crate::db::Db;
use crate::error::{ServiceError, ServiceResult};
use crate::services::cartellini::{cartellino_from_row, CARTELLINO_COLUMNS};
use crate::services::{like_pattern, page_or_first, page_size_or, total_pages};

const DEFAULT_PAGE_SIZE: i64 = 50;

pub async fn process(
    db: web::Data<Db>,
    payload: web::Json<SearchCartelliniRequest>,
) -> Result<HttpResponse, ServiceError> {
    let page = search_cartellini(&db, &payload).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// Builds the AND of all non-blank filters as escaped `LIKE` patterns.
/// SQLite's `LIKE` is case-insensitive for ASCII, which matches how the
/// catalog numbers and codes are written.
fn filter_clauses(filters: &SearchFilters) -> (Vec<String>, Vec<String>) {
    let mut clauses = Vec::new();
    let mut patterns = Vec::new();
    let columns = [
        ("numero", &filters.numero),
        ("commessa", &filters.commessa),
        ("articolo", &filters.articolo),
        ("descrizione", &filters.descrizione),
        ("linea", &filters.linea),
        ("cliente", &filters.cliente),
        ("ordine", &filters.ordine),
    ];
    for (column, value) in columns {
        if let Some(term) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            clauses.push(format!(
                "{} LIKE ?{} ESCAPE '\\'",
                column,
                patterns.len() + 1
            ));
            patterns.push(like_pattern(term));
        }
    }
    (clauses, patterns)
}

/// Resolves the 7-field filter set against the catalog. Results are
/// ordered by `articolo, numero` so consecutive rows cluster by article
/// for display grouping.
pub async fn search_cartellini(
    db: &Db,
    req: &SearchCartelliniRequest,
) -> ServiceResult<CartellinoPage> {
    if req.filters.is_empty() {
        return Err(ServiceError::Validation(
            "at least one search criterion required".to_string(),
        ));
    }

    let page = page_or_first(req.page);
    let page_size = page_size_or(req.page_size, DEFAULT_PAGE_SIZE);
    let (clauses, patterns) = filter_clauses(&req.filters);
    let where_clause = clauses.join(" AND ");

    let conn = db.lock().await;

    let total: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM cartellini WHERE {}", where_clause),
        params_from_iter(patterns.iter()),
        |row| row.get(0),
    )?;

    let sql = format!(
        "SELECT {} FROM cartellini WHERE {} ORDER BY articolo, numero LIMIT {} OFFSET {}",
        CARTELLINO_COLUMNS,
        where_clause,
        page_size,
        (page - 1) * page_size
    );
    let mut stmt = conn.prepare(&sql)?;
    let items = stmt
        .query_map(params_from_iter(patterns.iter()), cartellino_from_row)?
        .collect::<Result<Vec<Cartellino>, _>>()?;

    Ok(CartellinoPage {
        items,
        total,
        total_pages: total_pages(total, page_size),
    })
}
