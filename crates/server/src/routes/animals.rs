use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use models::animal::{AnimalPatch, Model as Animal, NewAnimal};
use service::db::animal_service;

use crate::{errors::JsonApiError, extract::{RecordId, RecordKind, ValidJson}, observability, state::ServerState};

pub struct Kind;

impl RecordKind for Kind {
    const NAME: &'static str = "animal lot";
}

type Id = RecordId<Kind>;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(get_one).put(update).delete(delete))
}

#[utoipa::path(get, path = "/api/animals", tag = "animals", responses((status = 200, description = "All lots, newest intake first", body = [crate::openapi::AnimalDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Animal>>, JsonApiError> {
    Ok(Json(animal_service::list_animals(&state.db).await?))
}

#[utoipa::path(post, path = "/api/animals", tag = "animals", request_body = crate::openapi::NewAnimalDoc, responses((status = 200, description = "Created", body = crate::openapi::AnimalDoc), (status = 422, description = "Validation Error")))]
pub async fn create(State(state): State<ServerState>, ValidJson(input): ValidJson<NewAnimal>) -> Result<Json<Animal>, JsonApiError> {
    let created = animal_service::create_animal(&state.db, input).await?;
    observability::record_created("animal");
    Ok(Json(created))
}

#[utoipa::path(get, path = "/api/animals/{id}", tag = "animals", params(("id" = Uuid, Path, description = "Lot id")), responses((status = 200, description = "Found", body = crate::openapi::AnimalDoc), (status = 404, description = "Not Found")))]
pub async fn get_one(State(state): State<ServerState>, RecordId(id, _): Id) -> Result<Json<Animal>, JsonApiError> {
    animal_service::get_animal(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found(Kind::NAME))
}

#[utoipa::path(put, path = "/api/animals/{id}", tag = "animals", params(("id" = Uuid, Path, description = "Lot id")), request_body = crate::openapi::AnimalPatchDoc, responses((status = 200, description = "Updated", body = crate::openapi::AnimalDoc), (status = 404, description = "Not Found"), (status = 422, description = "Validation Error")))]
pub async fn update(
    State(state): State<ServerState>,
    RecordId(id, _): Id,
    ValidJson(patch): ValidJson<AnimalPatch>,
) -> Result<Json<Animal>, JsonApiError> {
    Ok(Json(animal_service::update_animal(&state.db, id, patch).await?))
}

#[utoipa::path(delete, path = "/api/animals/{id}", tag = "animals", params(("id" = Uuid, Path, description = "Lot id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn delete(State(state): State<ServerState>, RecordId(id, _): Id) -> Result<StatusCode, JsonApiError> {
    if !animal_service::delete_animal(&state.db, id).await? {
        return Err(JsonApiError::not_found(Kind::NAME));
    }
    observability::record_deleted("animal");
    Ok(StatusCode::NO_CONTENT)
}
