use sea_orm::{DatabaseConnection, EntityTrait, ActiveModelTrait, QueryOrder};
use uuid::Uuid;
use tracing::{info, instrument};
use models::animal::{self, AnimalPatch, Entity as AnimalEntity, NewAnimal};
use crate::errors::ServiceError;

/// List animal lots, most recent intake first.
pub async fn list_animals(db: &DatabaseConnection) -> Result<Vec<animal::Model>, ServiceError> {
    AnimalEntity::find()
        .order_by_desc(animal::Column::IntakeDate)
        .order_by_desc(animal::Column::CreatedAt)
        .all(db)
        .await
        .map_err(ServiceError::db)
}

/// Create an animal lot after validation. New lots start active.
#[instrument(skip_all, fields(lot = %input.lot, animal_type = input.animal_type.as_str()))]
pub async fn create_animal(db: &DatabaseConnection, input: NewAnimal) -> Result<animal::Model, ServiceError> {
    let created = animal::create(db, input).await?;
    info!(id = %created.id, count = created.count, "animal lot created");
    Ok(created)
}

/// Get an animal lot by id.
pub async fn get_animal(db: &DatabaseConnection, id: Uuid) -> Result<Option<animal::Model>, ServiceError> {
    AnimalEntity::find_by_id(id).one(db).await.map_err(ServiceError::db)
}

/// Apply the supplied fields of `patch` to an existing lot.
pub async fn update_animal(db: &DatabaseConnection, id: Uuid, patch: AnimalPatch) -> Result<animal::Model, ServiceError> {
    patch.validate()?;
    let Some(existing) = get_animal(db, id).await? else { return Err(ServiceError::not_found("animal lot")); };
    let mut am: animal::ActiveModel = existing.into();
    patch.apply(&mut am);
    let updated = am.update(db).await.map_err(ServiceError::db)?;
    info!(id = %updated.id, status = ?updated.status, "animal lot updated");
    Ok(updated)
}

/// Delete an animal lot; returns true if deleted.
pub async fn delete_animal(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = AnimalEntity::delete_by_id(id).exec(db).await.map_err(ServiceError::db)?;
    if res.rows_affected > 0 { info!(%id, "animal lot deleted"); }
    Ok(res.rows_affected > 0)
}
