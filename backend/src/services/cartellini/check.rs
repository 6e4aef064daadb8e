use actix_web::{web, HttpResponse};
use common::model::cartellino::CheckCartellinoResponse;
use rusqlite::{params, OptionalExtension};

use crate::db::Db;
use crate::error::{ServiceError, ServiceResult};
use crate::services::cartellini::{cartellino_from_row, CARTELLINO_COLUMNS};

pub async fn process(
    db: web::Data<Db>,
    numero: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let response = check_cartellino(&db, &numero).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Exact lookup of one tag number, used slot-by-slot while numbers are
/// typed in. A blank value and an unknown number both answer
/// `valid: false`; only storage faults surface as errors.
pub async fn check_cartellino(db: &Db, raw: &str) -> ServiceResult<CheckCartellinoResponse> {
    let numero = raw.trim();
    if numero.is_empty() {
        return Ok(CheckCartellinoResponse {
            valid: false,
            cartellino: None,
        });
    }

    let conn = db.lock().await;
    let found = conn
        .query_row(
            &format!(
                "SELECT {} FROM cartellini WHERE numero = ?1",
                CARTELLINO_COLUMNS
            ),
            params![numero],
            cartellino_from_row,
        )
        .optional()?;

    Ok(CheckCartellinoResponse {
        valid: found.is_some(),
        cartellino: found,
    })
}
