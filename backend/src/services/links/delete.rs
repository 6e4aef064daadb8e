use actix_web::{web, HttpResponse};
use rusqlite::params;

use crate::db::Db;
use crate::error::{ServiceError, ServiceResult};

pub async fn process(
    db: web::Data<Db>,
    link_id: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    delete_link(&db, *link_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Removes exactly one link row. Deleting an id that is already gone is a
/// clean `NotFound`, and neither the cartellino nor the type is ever
/// cascaded.
pub async fn delete_link(db: &Db, link_id: i64) -> ServiceResult<()> {
    let conn = db.lock().await;
    let affected = conn.execute("DELETE FROM links WHERE id = ?1", params![link_id])?;
    if affected == 0 {
        return Err(ServiceError::NotFound(format!(
            "link {} not found",
            link_id
        )));
    }
    Ok(())
}
