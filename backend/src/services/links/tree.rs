//! Reconstruction of the tag → type → lots hierarchy from link rows
//! matching a free-text query.
//!
//! The literal `"*"` matches every link in the store. Any other value is
//! a case-insensitive SUBSTRING match against both the lot value and the
//! cartellino number (`%`/`_` in the query are escaped, so only `"*"`
//! acts as a wildcard). At most `TREE_ROW_CAP` rows, in `(created_at,
//! id)` ascending order, take part in the assembly; `total` always
//! reports the true pre-cap match count and `truncated` flags the cut.
//! Pagination counts top-level tag groups, not rows.

use std::collections::BTreeMap;

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use common::model::tree::{LotEntry, TagGroup, TreePage, TypeGroup};
use rusqlite::{params, Row};
use serde::Deserialize;

use crate::db::Db;
use crate::error::{ServiceError, ServiceResult};
use crate::services::{like_pattern, page_or_first, page_size_or, total_pages};

/// Upper bound on the link rows considered for one tree, keeping the
/// response size and latency bounded for catch-all queries.
pub const TREE_ROW_CAP: usize = 1000;

const DEFAULT_PAGE_SIZE: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct TreeQuery {
    pub q: String,
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub page_size: Option<i64>,
}

pub async fn process(
    db: web::Data<Db>,
    query: web::Query<TreeQuery>,
) -> Result<HttpResponse, ServiceError> {
    let page = build_tree(&db, &query.q, query.page, query.page_size).await?;
    Ok(HttpResponse::Ok().json(page))
}

struct MatchedRow {
    id: i64,
    tag_id: i64,
    type_id: i64,
    lot: String,
    note: Option<String>,
    created_at: DateTime<Utc>,
    type_name: String,
    numero: Option<String>,
    commessa: Option<String>,
    articolo: Option<String>,
    descrizione: Option<String>,
}

fn matched_row(row: &Row<'_>) -> rusqlite::Result<MatchedRow> {
    Ok(MatchedRow {
        id: row.get(0)?,
        tag_id: row.get(1)?,
        type_id: row.get(2)?,
        lot: row.get(3)?,
        note: row.get(4)?,
        created_at: row.get(5)?,
        type_name: row.get(6)?,
        numero: row.get(7)?,
        commessa: row.get(8)?,
        articolo: row.get(9)?,
        descrizione: row.get(10)?,
    })
}

pub async fn build_tree(
    db: &Db,
    query: &str,
    page: Option<i64>,
    page_size: Option<i64>,
) -> ServiceResult<TreePage> {
    let page = page_or_first(page);
    let page_size = page_size_or(page_size, DEFAULT_PAGE_SIZE);

    let term = query.trim();
    let pattern = (term != "*").then(|| like_pattern(term));
    let filter = if pattern.is_some() {
        "WHERE (l.lot LIKE ?1 ESCAPE '\\' OR c.numero LIKE ?1 ESCAPE '\\')"
    } else {
        ""
    };

    let conn = db.lock().await;

    let count_sql = format!(
        "SELECT COUNT(*) FROM links l LEFT JOIN cartellini c ON c.id = l.tag_id {}",
        filter
    );
    let total: i64 = match &pattern {
        Some(p) => conn.query_row(&count_sql, params![p], |row| row.get(0))?,
        None => conn.query_row(&count_sql, [], |row| row.get(0))?,
    };

    let rows_sql = format!(
        "SELECT l.id, l.tag_id, l.type_id, l.lot, l.note, l.created_at,
                t.name, c.numero, c.commessa, c.articolo, c.descrizione
         FROM links l
         JOIN link_types t ON t.id = l.type_id
         LEFT JOIN cartellini c ON c.id = l.tag_id
         {}
         ORDER BY l.created_at, l.id
         LIMIT {}",
        filter, TREE_ROW_CAP
    );
    let mut stmt = conn.prepare(&rows_sql)?;
    let rows: Vec<MatchedRow> = match &pattern {
        Some(p) => stmt
            .query_map(params![p], matched_row)?
            .collect::<Result<_, _>>()?,
        None => stmt
            .query_map([], matched_row)?
            .collect::<Result<_, _>>()?,
    };

    let truncated = total > rows.len() as i64;
    let groups = assemble(rows);
    let group_count = groups.len() as i64;
    let tree: Vec<TagGroup> = groups
        .into_iter()
        .skip(((page - 1) * page_size) as usize)
        .take(page_size as usize)
        .collect();

    Ok(TreePage {
        tree,
        total,
        total_pages: total_pages(group_count, page_size),
        truncated,
    })
}

struct TagAccum {
    numero: Option<String>,
    commessa: Option<String>,
    articolo: Option<String>,
    descrizione: Option<String>,
    // Keyed by (name, id) so type groups come out name-ascending with the
    // id as tie-break between duplicate names.
    types: BTreeMap<(String, i64), Vec<LotEntry>>,
}

/// Groups capped rows by tag, then by type. Tag groups come out in tag id
/// order, lot entries keep the `(created_at, id)` order of the query.
fn assemble(rows: Vec<MatchedRow>) -> Vec<TagGroup> {
    let mut tags: BTreeMap<i64, TagAccum> = BTreeMap::new();
    for row in rows {
        let tag = tags.entry(row.tag_id).or_insert_with(|| TagAccum {
            numero: row.numero.clone(),
            commessa: row.commessa.clone(),
            articolo: row.articolo.clone(),
            descrizione: row.descrizione.clone(),
            types: BTreeMap::new(),
        });
        tag.types
            .entry((row.type_name, row.type_id))
            .or_default()
            .push(LotEntry {
                id: row.id,
                lot: row.lot,
                note: row.note,
                created_at: row.created_at,
            });
    }

    tags.into_iter()
        .map(|(tag_id, accum)| TagGroup {
            tag_id,
            numero: accum.numero,
            commessa: accum.commessa,
            articolo: accum.articolo,
            descrizione: accum.descrizione,
            types: accum
                .types
                .into_iter()
                .map(|((type_name, type_id), lots)| TypeGroup {
                    type_id,
                    type_name,
                    lots,
                })
                .collect(),
        })
        .collect()
}
