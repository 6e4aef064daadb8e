use actix_web::{web, HttpResponse};
use common::model::link_type::LinkType;
use common::requests::CreateTypeRequest;
use rusqlite::params;

use crate::db::Db;
use crate::error::{ServiceError, ServiceResult};

pub async fn process(
    db: web::Data<Db>,
    payload: web::Json<CreateTypeRequest>,
) -> Result<HttpResponse, ServiceError> {
    let created = create_type(&db, &payload).await?;
    Ok(HttpResponse::Ok().json(created))
}

/// Persists a new relationship type. The name is trimmed and must not be
/// blank; duplicate names are allowed (a nuisance for the operator, not a
/// correctness violation).
pub async fn create_type(db: &Db, req: &CreateTypeRequest) -> ServiceResult<LinkType> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(ServiceError::Validation(
            "type name must not be empty".to_string(),
        ));
    }
    let note = req
        .note
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string);

    let conn = db.lock().await;
    conn.execute(
        "INSERT INTO link_types (name, note) VALUES (?1, ?2)",
        params![name, note],
    )?;

    Ok(LinkType {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
        note,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::empty_db;

    fn request(name: &str, note: Option<&str>) -> CreateTypeRequest {
        CreateTypeRequest {
            name: name.to_string(),
            note: note.map(str::to_string),
        }
    }

    #[actix_web::test]
    async fn persists_and_returns_the_new_type() {
        let db = empty_db().await;
        let created = create_type(&db, &request("spedizione", Some("lotti in uscita")))
            .await
            .unwrap();
        assert!(created.id > 0);
        assert_eq!(created.name, "spedizione");
        assert_eq!(created.note.as_deref(), Some("lotti in uscita"));
    }

    #[actix_web::test]
    async fn rejects_a_blank_name() {
        let db = empty_db().await;
        let err = create_type(&db, &request("   ", None)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[actix_web::test]
    async fn trims_name_and_drops_blank_note() {
        let db = empty_db().await;
        let created = create_type(&db, &request("  reso  ", Some("  ")))
            .await
            .unwrap();
        assert_eq!(created.name, "reso");
        assert!(created.note.is_none());
    }

    #[actix_web::test]
    async fn duplicate_names_are_tolerated() {
        let db = empty_db().await;
        create_type(&db, &request("spedizione", None)).await.unwrap();
        let second = create_type(&db, &request("spedizione", None)).await.unwrap();
        assert!(second.id > 0, "second row persists under its own id");
    }
}
