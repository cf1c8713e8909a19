use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use uuid::Uuid;

use models::egg_collection::{Model as EggCollection, NewEggCollection};
use service::db::egg_collection_service;

use crate::{errors::JsonApiError, extract::{RecordId, RecordKind, ValidJson}, observability, state::ServerState};

pub struct Kind;

impl RecordKind for Kind {
    const NAME: &'static str = "egg collection";
}

type Id = RecordId<Kind>;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/today", get(today))
        .route("/:id", get(get_one).delete(delete))
}

#[utoipa::path(get, path = "/api/egg-collection", tag = "egg-collection", responses((status = 200, description = "All collections, newest first", body = [crate::openapi::EggCollectionDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<EggCollection>>, JsonApiError> {
    Ok(Json(egg_collection_service::list_collections(&state.db).await?))
}

#[utoipa::path(get, path = "/api/egg-collection/today", tag = "egg-collection", responses((status = 200, description = "Collections dated today (UTC)", body = [crate::openapi::EggCollectionDoc])))]
pub async fn today(State(state): State<ServerState>) -> Result<Json<Vec<EggCollection>>, JsonApiError> {
    let day = Utc::now().date_naive();
    Ok(Json(egg_collection_service::collections_on(&state.db, day).await?))
}

#[utoipa::path(post, path = "/api/egg-collection", tag = "egg-collection", request_body = crate::openapi::NewEggCollectionDoc, responses((status = 200, description = "Recorded", body = crate::openapi::EggCollectionDoc), (status = 422, description = "Validation Error")))]
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(input): ValidJson<NewEggCollection>,
) -> Result<Json<EggCollection>, JsonApiError> {
    let created = egg_collection_service::create_collection(&state.db, input).await?;
    observability::record_created("egg_collection");
    Ok(Json(created))
}

#[utoipa::path(get, path = "/api/egg-collection/{id}", tag = "egg-collection", params(("id" = Uuid, Path, description = "Collection id")), responses((status = 200, description = "Found", body = crate::openapi::EggCollectionDoc), (status = 404, description = "Not Found")))]
pub async fn get_one(State(state): State<ServerState>, RecordId(id, _): Id) -> Result<Json<EggCollection>, JsonApiError> {
    egg_collection_service::get_collection(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found(Kind::NAME))
}

#[utoipa::path(delete, path = "/api/egg-collection/{id}", tag = "egg-collection", params(("id" = Uuid, Path, description = "Collection id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn delete(State(state): State<ServerState>, RecordId(id, _): Id) -> Result<StatusCode, JsonApiError> {
    if !egg_collection_service::delete_collection(&state.db, id).await? {
        return Err(JsonApiError::not_found(Kind::NAME));
    }
    observability::record_deleted("egg_collection");
    Ok(StatusCode::NO_CONTENT)
}
