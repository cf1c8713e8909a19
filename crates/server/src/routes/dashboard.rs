use axum::{extract::State, Json};
use chrono::Utc;

use service::db::dashboard_service::{self, Dashboard};

use crate::{errors::JsonApiError, state::ServerState};

/// Farm summary as of today (UTC).
#[utoipa::path(get, path = "/api/dashboard", tag = "dashboard", responses((status = 200, description = "Farm summary", body = crate::openapi::DashboardDoc)))]
pub async fn get(State(state): State<ServerState>) -> Result<Json<Dashboard>, JsonApiError> {
    let today = Utc::now().date_naive();
    Ok(Json(dashboard_service::dashboard(&state.db, today).await?))
}
