use actix_web::{web, HttpResponse};
use common::model::link_type::LinkType;

use crate::db::Db;
use crate::error::{ServiceError, ServiceResult};

pub async fn process(db: web::Data<Db>) -> Result<HttpResponse, ServiceError> {
    let types = list_types(&db).await?;
    Ok(HttpResponse::Ok().json(types))
}

/// All types in insertion order.
pub async fn list_types(db: &Db) -> ServiceResult<Vec<LinkType>> {
    let conn = db.lock().await;
    let mut stmt = conn.prepare("SELECT id, name, note FROM link_types ORDER BY id")?;
    let types = stmt
        .query_map([], |row| {
            Ok(LinkType {
                id: row.get(0)?,
                name: row.get(1)?,
                note: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<LinkType>, _>>()?;
    Ok(types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::link_types::create::create_type;
    use crate::testing::empty_db;
    use common::requests::CreateTypeRequest;

    #[actix_web::test]
    async fn lists_in_insertion_order() {
        let db = empty_db().await;
        for name in ["spedizione", "reso", "collaudo"] {
            create_type(
                &db,
                &CreateTypeRequest {
                    name: name.to_string(),
                    note: None,
                },
            )
            .await
            .unwrap();
        }

        let types = list_types(&db).await.unwrap();
        let names: Vec<_> = types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["spedizione", "reso", "collaudo"]);
    }

    #[actix_web::test]
    async fn empty_registry_lists_nothing() {
        let db = empty_db().await;
        assert!(list_types(&db).await.unwrap().is_empty());
    }
}
