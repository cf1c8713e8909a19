use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use uuid::Uuid;

use models::feed_calculation::{Model as FeedCalculation, NewFeedCalculation};
use service::db::feed_service;

use crate::{errors::JsonApiError, extract::{RecordId, RecordKind, ValidJson}, observability, state::ServerState};

pub struct Kind;

impl RecordKind for Kind {
    const NAME: &'static str = "feed calculation";
}

type Id = RecordId<Kind>;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(list).post(calculate))
        .route("/:id", get(get_one).delete(delete))
}

#[utoipa::path(post, path = "/api/feed-calculator", tag = "feed", request_body = crate::openapi::NewFeedCalculationDoc, responses((status = 200, description = "Calculated and stored", body = crate::openapi::FeedCalculationDoc), (status = 422, description = "Validation Error")))]
pub async fn calculate(
    State(state): State<ServerState>,
    ValidJson(input): ValidJson<NewFeedCalculation>,
) -> Result<Json<FeedCalculation>, JsonApiError> {
    let stored = feed_service::calculate_feed(&state.db, input, Utc::now().date_naive()).await?;
    observability::record_created("feed_calculation");
    observability::feed_calculated(stored.animal_type.as_str());
    Ok(Json(stored))
}

#[utoipa::path(get, path = "/api/feed-calculator", tag = "feed", responses((status = 200, description = "All calculations, newest first", body = [crate::openapi::FeedCalculationDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<FeedCalculation>>, JsonApiError> {
    Ok(Json(feed_service::list_calculations(&state.db).await?))
}

#[utoipa::path(get, path = "/api/feed-calculator/{id}", tag = "feed", params(("id" = Uuid, Path, description = "Calculation id")), responses((status = 200, description = "Found", body = crate::openapi::FeedCalculationDoc), (status = 404, description = "Not Found")))]
pub async fn get_one(State(state): State<ServerState>, RecordId(id, _): Id) -> Result<Json<FeedCalculation>, JsonApiError> {
    feed_service::get_calculation(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found(Kind::NAME))
}

#[utoipa::path(delete, path = "/api/feed-calculator/{id}", tag = "feed", params(("id" = Uuid, Path, description = "Calculation id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn delete(State(state): State<ServerState>, RecordId(id, _): Id) -> Result<StatusCode, JsonApiError> {
    if !feed_service::delete_calculation(&state.db, id).await? {
        return Err(JsonApiError::not_found(Kind::NAME));
    }
    observability::record_deleted("feed_calculation");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::routes::test_app::{app, call};
    use axum::http::{Method, StatusCode};
    use chrono::Utc;
    use serde_json::json;

    fn close(v: &serde_json::Value, expected: f64) -> bool {
        v.as_f64().map(|x| (x - expected).abs() < 1e-9).unwrap_or(false)
    }

    #[tokio::test]
    async fn laying_estimate_is_persisted() {
        let app = app().await;
        let body = json!({
            "lot": "Lote-A",
            "animal_type": "laying",
            "animal_count": 100,
            "age_days": 120,
            "avg_weight": 1.6,
            "feed_price_per_kg": 0.5
        });
        let (status, calc) = call(&app, Method::POST, "/api/feed-calculator", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(close(&calc["daily_consumption_kg"], 8.0));
        assert!(close(&calc["monthly_consumption_kg"], 240.0));
        assert!(close(&calc["estimated_cost"], 120.0));
        assert_eq!(calc["calculation_date"], Utc::now().date_naive().to_string());

        let (status, fetched) = call(&app, Method::GET, &format!("/api/feed-calculator/{}", calc["id"].as_str().unwrap()), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["id"], calc["id"]);
        assert!(close(&fetched["estimated_cost"], 120.0));
    }

    #[tokio::test]
    async fn broiler_estimate() {
        let app = app().await;
        let body = json!({
            "lot": "Lote-B",
            "animal_type": "broiler",
            "animal_count": 200,
            "age_days": 25,
            "avg_weight": 1.1,
            "feed_price_per_kg": 0.6
        });
        let (status, calc) = call(&app, Method::POST, "/api/feed-calculator", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(close(&calc["daily_consumption_kg"], 20.0));
        assert!(close(&calc["monthly_consumption_kg"], 600.0));
        assert!(close(&calc["estimated_cost"], 360.0));

        let (_, all) = call(&app, Method::GET, "/api/feed-calculator", None).await;
        assert_eq!(all.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn negative_price_is_rejected() {
        let app = app().await;
        let body = json!({
            "lot": "Lote-C",
            "animal_type": "breeder",
            "animal_count": 10,
            "age_days": 200,
            "avg_weight": 3.0,
            "feed_price_per_kg": -1.0
        });
        let (status, err) = call(&app, Method::POST, "/api/feed-calculator", Some(body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err["fields"][0]["field"], "feed_price_per_kg");
        let (_, all) = call(&app, Method::GET, "/api/feed-calculator", None).await;
        assert!(all.as_array().unwrap().is_empty());
    }
}
