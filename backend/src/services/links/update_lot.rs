use actix_web::{web, HttpResponse};
use common::model::link::Link;
use common::requests::UpdateLotRequest;
use rusqlite::{params, OptionalExtension};

use crate::db::Db;
use crate::error::{ServiceError, ServiceResult};
use crate::services::links::link_from_row;

pub async fn process(
    db: web::Data<Db>,
    link_id: web::Path<i64>,
    payload: web::Json<UpdateLotRequest>,
) -> Result<HttpResponse, ServiceError> {
    let updated = update_lot(&db, *link_id, &payload).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// Edits one link's lot value in place. The row identity and every other
/// field are untouched. Unlike creation, a collision here is an error:
/// turning this row into a duplicate of an existing `(tag_id, type_id,
/// lot)` triple is rejected with `Conflict` rather than silently
/// producing two identical rows.
pub async fn update_lot(db: &Db, link_id: i64, req: &UpdateLotRequest) -> ServiceResult<Link> {
    let new_lot = req.lot.trim();
    if new_lot.is_empty() {
        return Err(ServiceError::Validation(
            "lot must not be empty".to_string(),
        ));
    }

    let conn = db.lock().await;
    let link = conn
        .query_row(
            "SELECT id, tag_id, type_id, lot, note, created_at FROM links WHERE id = ?1",
            params![link_id],
            link_from_row,
        )
        .optional()?
        .ok_or_else(|| ServiceError::NotFound(format!("link {} not found", link_id)))?;

    let collides: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM links
         WHERE tag_id = ?1 AND type_id = ?2 AND lot = ?3 AND id <> ?4)",
        params![link.tag_id, link.type_id, new_lot, link_id],
        |row| row.get(0),
    )?;
    if collides {
        return Err(ServiceError::Conflict(format!(
            "cartellino {} already carries lot \"{}\" under this type",
            link.tag_id, new_lot
        )));
    }

    conn.execute(
        "UPDATE links SET lot = ?1 WHERE id = ?2",
        params![new_lot, link_id],
    )?;

    Ok(Link {
        lot: new_lot.to_string(),
        ..link
    })
}
