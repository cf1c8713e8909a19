use sea_orm::{DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, ColumnTrait};
use chrono::NaiveDate;
use uuid::Uuid;
use tracing::info;
use models::egg_collection::{self, Entity as EggCollectionEntity, NewEggCollection};
use crate::errors::ServiceError;

/// List egg collections, newest date first.
pub async fn list_collections(db: &DatabaseConnection) -> Result<Vec<egg_collection::Model>, ServiceError> {
    EggCollectionEntity::find()
        .order_by_desc(egg_collection::Column::Date)
        .order_by_desc(egg_collection::Column::CreatedAt)
        .all(db)
        .await
        .map_err(ServiceError::db)
}

/// The `limit` most recent collections.
pub async fn latest_collections(db: &DatabaseConnection, limit: u64) -> Result<Vec<egg_collection::Model>, ServiceError> {
    EggCollectionEntity::find()
        .order_by_desc(egg_collection::Column::Date)
        .order_by_desc(egg_collection::Column::CreatedAt)
        .limit(limit)
        .all(db)
        .await
        .map_err(ServiceError::db)
}

/// Collections recorded for a single calendar day.
pub async fn collections_on(db: &DatabaseConnection, day: NaiveDate) -> Result<Vec<egg_collection::Model>, ServiceError> {
    EggCollectionEntity::find()
        .filter(egg_collection::Column::Date.eq(day))
        .order_by_desc(egg_collection::Column::CreatedAt)
        .all(db)
        .await
        .map_err(ServiceError::db)
}

pub async fn create_collection(db: &DatabaseConnection, input: NewEggCollection) -> Result<egg_collection::Model, ServiceError> {
    let created = egg_collection::create(db, input).await?;
    info!(id = %created.id, source_lot = %created.source_lot, count = created.count, "egg collection recorded");
    Ok(created)
}

pub async fn get_collection(db: &DatabaseConnection, id: Uuid) -> Result<Option<egg_collection::Model>, ServiceError> {
    EggCollectionEntity::find_by_id(id).one(db).await.map_err(ServiceError::db)
}

pub async fn delete_collection(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = EggCollectionEntity::delete_by_id(id).exec(db).await.map_err(ServiceError::db)?;
    if res.rows_affected > 0 { info!(%id, "egg collection deleted"); }
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::enums::EggType;

    fn collection(day: NaiveDate, count: i32) -> NewEggCollection {
        NewEggCollection {
            date: day,
            source_lot: "Lote-P1".into(),
            egg_type: EggType::Commercial,
            count,
            total_weight: count as f64 * 0.06,
            notes: None,
        }
    }

    #[tokio::test]
    async fn filters_by_day_and_sorts_desc() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let d1 = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        create_collection(&db, collection(d1, 80)).await?;
        create_collection(&db, collection(d2, 90)).await?;
        create_collection(&db, collection(d2, 10)).await?;

        let all = list_collections(&db).await?;
        assert_eq!(all.iter().map(|c| c.date).collect::<Vec<_>>(), vec![d2, d2, d1]);

        let on_d2 = collections_on(&db, d2).await?;
        assert_eq!(on_d2.len(), 2);
        assert!(on_d2.iter().all(|c| c.date == d2));

        let latest = latest_collections(&db, 1).await?;
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].date, d2);
        Ok(())
    }

    #[tokio::test]
    async fn delete_then_get_is_none() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let c = create_collection(&db, collection(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), 12)).await?;
        assert_eq!(get_collection(&db, c.id).await?, Some(c.clone()));
        assert!(delete_collection(&db, c.id).await?);
        assert_eq!(get_collection(&db, c.id).await?, None);
        assert!(!delete_collection(&db, c.id).await?);
        Ok(())
    }
}
