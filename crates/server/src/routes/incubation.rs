use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use models::incubation_batch::{IncubationPatch, Model as IncubationBatch, NewIncubationBatch};
use service::db::incubation_service;

use crate::{errors::JsonApiError, extract::{RecordId, RecordKind, ValidJson}, observability, state::ServerState};

pub struct Kind;

impl RecordKind for Kind {
    const NAME: &'static str = "incubation batch";
}

type Id = RecordId<Kind>;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(get_one).put(update).delete(delete))
}

#[utoipa::path(get, path = "/api/incubation", tag = "incubation", responses((status = 200, description = "All batches, newest first", body = [crate::openapi::IncubationBatchDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<IncubationBatch>>, JsonApiError> {
    Ok(Json(incubation_service::list_batches(&state.db).await?))
}

#[utoipa::path(post, path = "/api/incubation", tag = "incubation", request_body = crate::openapi::NewIncubationBatchDoc, responses((status = 200, description = "Created", body = crate::openapi::IncubationBatchDoc), (status = 422, description = "Validation Error")))]
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(input): ValidJson<NewIncubationBatch>,
) -> Result<Json<IncubationBatch>, JsonApiError> {
    let created = incubation_service::create_batch(&state.db, input).await?;
    observability::record_created("incubation_batch");
    Ok(Json(created))
}

#[utoipa::path(get, path = "/api/incubation/{id}", tag = "incubation", params(("id" = Uuid, Path, description = "Batch id")), responses((status = 200, description = "Found", body = crate::openapi::IncubationBatchDoc), (status = 404, description = "Not Found")))]
pub async fn get_one(State(state): State<ServerState>, RecordId(id, _): Id) -> Result<Json<IncubationBatch>, JsonApiError> {
    incubation_service::get_batch(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found(Kind::NAME))
}

#[utoipa::path(put, path = "/api/incubation/{id}", tag = "incubation", params(("id" = Uuid, Path, description = "Batch id")), request_body = crate::openapi::IncubationPatchDoc, responses((status = 200, description = "Updated", body = crate::openapi::IncubationBatchDoc), (status = 404, description = "Not Found"), (status = 422, description = "Validation Error")))]
pub async fn update(
    State(state): State<ServerState>,
    RecordId(id, _): Id,
    ValidJson(patch): ValidJson<IncubationPatch>,
) -> Result<Json<IncubationBatch>, JsonApiError> {
    Ok(Json(incubation_service::update_batch(&state.db, id, patch).await?))
}

#[utoipa::path(delete, path = "/api/incubation/{id}", tag = "incubation", params(("id" = Uuid, Path, description = "Batch id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn delete(State(state): State<ServerState>, RecordId(id, _): Id) -> Result<StatusCode, JsonApiError> {
    if !incubation_service::delete_batch(&state.db, id).await? {
        return Err(JsonApiError::not_found(Kind::NAME));
    }
    observability::record_deleted("incubation_batch");
    Ok(StatusCode::NO_CONTENT)
}
