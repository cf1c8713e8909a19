use sea_orm::{DatabaseConnection, EntityTrait, ActiveModelTrait, QueryOrder};
use uuid::Uuid;
use tracing::info;
use models::incubation_batch::{self, Entity as IncubationEntity, IncubationPatch, NewIncubationBatch};
use crate::errors::ServiceError;

/// List incubation batches, most recently started first.
pub async fn list_batches(db: &DatabaseConnection) -> Result<Vec<incubation_batch::Model>, ServiceError> {
    IncubationEntity::find()
        .order_by_desc(incubation_batch::Column::IncubationDate)
        .order_by_desc(incubation_batch::Column::CreatedAt)
        .all(db)
        .await
        .map_err(ServiceError::db)
}

/// Create a batch; temperature and humidity fall back to 37.5 °C and 60 %.
pub async fn create_batch(db: &DatabaseConnection, input: NewIncubationBatch) -> Result<incubation_batch::Model, ServiceError> {
    let created = incubation_batch::create(db, input).await?;
    info!(id = %created.id, lot = %created.lot, eggs = created.egg_count, "incubation batch created");
    Ok(created)
}

pub async fn get_batch(db: &DatabaseConnection, id: Uuid) -> Result<Option<incubation_batch::Model>, ServiceError> {
    IncubationEntity::find_by_id(id).one(db).await.map_err(ServiceError::db)
}

/// Apply the supplied fields of `patch`; the hatched count is checked against the stored egg count.
pub async fn update_batch(db: &DatabaseConnection, id: Uuid, patch: IncubationPatch) -> Result<incubation_batch::Model, ServiceError> {
    let Some(existing) = get_batch(db, id).await? else { return Err(ServiceError::not_found("incubation batch")); };
    patch.validate(&existing)?;
    let mut am: incubation_batch::ActiveModel = existing.into();
    patch.apply(&mut am);
    let updated = am.update(db).await.map_err(ServiceError::db)?;
    info!(id = %updated.id, status = ?updated.status, hatched = updated.hatched_count, "incubation batch updated");
    Ok(updated)
}

pub async fn delete_batch(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = IncubationEntity::delete_by_id(id).exec(db).await.map_err(ServiceError::db)?;
    if res.rows_affected > 0 { info!(%id, "incubation batch deleted"); }
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use chrono::NaiveDate;
    use models::enums::{AnimalType, IncubationStatus};

    fn batch() -> NewIncubationBatch {
        NewIncubationBatch {
            lot: "Inc-1".into(),
            egg_type: AnimalType::Laying,
            breed: "Isa Brown".into(),
            egg_count: 120,
            incubation_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            expected_hatch_date: NaiveDate::from_ymd_opt(2024, 5, 22).unwrap(),
            temperature: 37.8,
            humidity: 65.0,
            notes: Some("first batch".into()),
        }
    }

    #[tokio::test]
    async fn incubation_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let b = create_batch(&db, batch()).await?;
        assert_eq!(b.status, IncubationStatus::Active);
        assert_eq!(b.hatched_count, 0);

        let patch = IncubationPatch {
            status: Some(IncubationStatus::Hatched),
            hatched_count: Some(102),
            ..Default::default()
        };
        let updated = update_batch(&db, b.id, patch).await?;
        assert_eq!(updated.status, IncubationStatus::Hatched);
        assert_eq!(updated.hatched_count, 102);
        assert_eq!(updated.temperature, 37.8);
        assert_eq!(updated.humidity, 65.0);
        assert_eq!(updated.notes.as_deref(), Some("first batch"));

        assert_eq!(list_batches(&db).await?.len(), 1);
        assert!(delete_batch(&db, b.id).await?);
        assert!(get_batch(&db, b.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn hatched_count_above_eggs_leaves_batch_untouched() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let b = create_batch(&db, batch()).await?;
        let patch = IncubationPatch { hatched_count: Some(500), humidity: Some(70.0), ..Default::default() };
        let err = update_batch(&db, b.id, patch).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        let again = get_batch(&db, b.id).await?.unwrap();
        assert_eq!(again, b);
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_batch_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = update_batch(&db, Uuid::new_v4(), IncubationPatch::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }
}
