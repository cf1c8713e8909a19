use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use models::farm_transaction::{Model as Transaction, NewTransaction};
use service::db::transaction_service::{self, Balance};

use crate::{errors::JsonApiError, extract::{RecordId, RecordKind, ValidJson}, observability, state::ServerState};

pub struct Kind;

impl RecordKind for Kind {
    const NAME: &'static str = "transaction";
}

type Id = RecordId<Kind>;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/balance", get(balance))
        .route("/:id", get(get_one).delete(delete))
}

#[utoipa::path(get, path = "/api/transactions", tag = "transactions", responses((status = 200, description = "All transactions, newest first", body = [crate::openapi::TransactionDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Transaction>>, JsonApiError> {
    Ok(Json(transaction_service::list_transactions(&state.db).await?))
}

#[utoipa::path(post, path = "/api/transactions", tag = "transactions", request_body = crate::openapi::NewTransactionDoc, responses((status = 200, description = "Recorded", body = crate::openapi::TransactionDoc), (status = 422, description = "Validation Error")))]
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(input): ValidJson<NewTransaction>,
) -> Result<Json<Transaction>, JsonApiError> {
    let created = transaction_service::create_transaction(&state.db, input).await?;
    observability::record_created("transaction");
    Ok(Json(created))
}

#[utoipa::path(get, path = "/api/transactions/balance", tag = "transactions", responses((status = 200, description = "All-time income, expense and balance", body = crate::openapi::BalanceDoc)))]
pub async fn balance(State(state): State<ServerState>) -> Result<Json<Balance>, JsonApiError> {
    Ok(Json(transaction_service::balance(&state.db).await?))
}

#[utoipa::path(get, path = "/api/transactions/{id}", tag = "transactions", params(("id" = Uuid, Path, description = "Transaction id")), responses((status = 200, description = "Found", body = crate::openapi::TransactionDoc), (status = 404, description = "Not Found")))]
pub async fn get_one(State(state): State<ServerState>, RecordId(id, _): Id) -> Result<Json<Transaction>, JsonApiError> {
    transaction_service::get_transaction(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found(Kind::NAME))
}

#[utoipa::path(delete, path = "/api/transactions/{id}", tag = "transactions", params(("id" = Uuid, Path, description = "Transaction id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn delete(State(state): State<ServerState>, RecordId(id, _): Id) -> Result<StatusCode, JsonApiError> {
    if !transaction_service::delete_transaction(&state.db, id).await? {
        return Err(JsonApiError::not_found(Kind::NAME));
    }
    observability::record_deleted("transaction");
    Ok(StatusCode::NO_CONTENT)
}
