use actix_web::{web, HttpResponse};
use chrono::Utc;
use common::model::link::CreateLinksResponse;
use common::requests::CreateLinksRequest;
use log::warn;
use rusqlite::params;

use crate::db::Db;
use crate::error::{ServiceError, ServiceResult};

pub async fn process(
    db: web::Data<Db>,
    payload: web::Json<CreateLinksRequest>,
) -> Result<HttpResponse, ServiceError> {
    let response = create_links(&db, &payload).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Materializes the cross product of `tag_ids × lots` under `type_id`.
///
/// Each pair is one `INSERT OR IGNORE`: a pair that collides with an
/// existing `(tag_id, type_id, lot)` triple is skipped silently, and a
/// storage fault on one pair is logged and skipped without aborting the
/// rest of the batch. The returned count covers only rows actually
/// inserted. The optional `note` is stored on every row this batch
/// creates.
pub async fn create_links(db: &Db, req: &CreateLinksRequest) -> ServiceResult<CreateLinksResponse> {
    // The lot list comes from free text split on line breaks; trim and
    // drop blanks again here rather than trusting the caller.
    let lots: Vec<&str> = req
        .lots
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();
    if lots.is_empty() {
        return Err(ServiceError::Validation(
            "at least one lot is required".to_string(),
        ));
    }
    if req.tag_ids.is_empty() {
        return Err(ServiceError::Validation(
            "at least one cartellino is required".to_string(),
        ));
    }
    let note = req.note.as_deref().map(str::trim).filter(|n| !n.is_empty());

    let conn = db.lock().await;
    let type_exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM link_types WHERE id = ?1)",
        params![req.type_id],
        |row| row.get(0),
    )?;
    if !type_exists {
        return Err(ServiceError::NotFound(format!(
            "link type {} not found",
            req.type_id
        )));
    }

    let created_at = Utc::now();
    let mut created = 0i64;
    for &tag_id in &req.tag_ids {
        for lot in &lots {
            match conn.execute(
                "INSERT OR IGNORE INTO links (tag_id, type_id, lot, note, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![tag_id, req.type_id, lot, note, created_at],
            ) {
                Ok(inserted) => created += inserted as i64,
                Err(e) => {
                    // Per-row recovery: one bad pair must not sink the batch.
                    warn!(
                        "skipping link (tag {}, type {}, lot {}): {}",
                        tag_id, req.type_id, lot, e
                    );
                }
            }
        }
    }

    Ok(CreateLinksResponse { created })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{count_links, empty_db, seed_type};

    fn request(type_id: i64, lots: &[&str], tag_ids: &[i64]) -> CreateLinksRequest {
        CreateLinksRequest {
            type_id,
            lots: lots.iter().map(|l| l.to_string()).collect(),
            tag_ids: tag_ids.to_vec(),
            note: None,
        }
    }

    #[actix_web::test]
    async fn creates_the_full_cross_product() {
        let db = empty_db().await;
        let type_id = seed_type(&db, "spedizione").await;

        let response = create_links(
            &db,
            &request(type_id, &["LOT001", "LOT002"], &[101, 102]),
        )
        .await
        .unwrap();

        assert_eq!(response.created, 4);
        assert_eq!(count_links(&db).await, 4);
    }

    #[actix_web::test]
    async fn repeating_the_call_is_idempotent() {
        let db = empty_db().await;
        let type_id = seed_type(&db, "spedizione").await;
        let req = request(type_id, &["LOT001", "LOT002"], &[101, 102]);

        assert_eq!(create_links(&db, &req).await.unwrap().created, 4);
        assert_eq!(create_links(&db, &req).await.unwrap().created, 0);
        assert_eq!(count_links(&db).await, 4);
    }

    #[actix_web::test]
    async fn overlapping_batch_counts_only_new_rows() {
        let db = empty_db().await;
        let type_id = seed_type(&db, "spedizione").await;

        create_links(&db, &request(type_id, &["LOT001"], &[101]))
            .await
            .unwrap();
        let response = create_links(&db, &request(type_id, &["LOT001", "LOT002"], &[101]))
            .await
            .unwrap();

        assert_eq!(response.created, 1);
        assert_eq!(count_links(&db).await, 2);
    }

    #[actix_web::test]
    async fn unknown_type_is_not_found() {
        let db = empty_db().await;
        let err = create_links(&db, &request(99, &["LOT001"], &[101]))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(count_links(&db).await, 0);
    }

    #[actix_web::test]
    async fn empty_inputs_are_rejected() {
        let db = empty_db().await;
        let type_id = seed_type(&db, "spedizione").await;

        let err = create_links(&db, &request(type_id, &[], &[101]))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let err = create_links(&db, &request(type_id, &["LOT001"], &[]))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[actix_web::test]
    async fn blank_lot_lines_are_discarded() {
        let db = empty_db().await;
        let type_id = seed_type(&db, "spedizione").await;

        let response = create_links(
            &db,
            &request(type_id, &["  LOT001  ", "", "   "], &[101]),
        )
        .await
        .unwrap();

        assert_eq!(response.created, 1);
        let db_lock = db.lock().await;
        let lot: String = db_lock
            .query_row("SELECT lot FROM links", [], |row| row.get(0))
            .unwrap();
        assert_eq!(lot, "LOT001", "stored lot is trimmed");
    }

    #[actix_web::test]
    async fn only_blank_lots_count_as_empty() {
        let db = empty_db().await;
        let type_id = seed_type(&db, "spedizione").await;
        let err = create_links(&db, &request(type_id, &["", "  "], &[101]))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[actix_web::test]
    async fn batch_note_lands_on_every_created_row() {
        let db = empty_db().await;
        let type_id = seed_type(&db, "spedizione").await;
        let req = CreateLinksRequest {
            type_id,
            lots: vec!["LOT001".to_string(), "LOT002".to_string()],
            tag_ids: vec![101],
            note: Some("spedizione di marzo".to_string()),
        };

        create_links(&db, &req).await.unwrap();

        let conn = db.lock().await;
        let with_note: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM links WHERE note = 'spedizione di marzo'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(with_note, 2);
    }
}
