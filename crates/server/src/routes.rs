use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::{observability, openapi::ApiDoc, state::ServerState};

pub mod animals;
pub mod dashboard;
pub mod egg_collections;
pub mod feed;
pub mod incubation;
pub mod transactions;

#[utoipa::path(get, path = "/api/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::current())
}

/// Routes served under `/api`.
pub fn api_router() -> Router<ServerState> {
    Router::new()
        .route("/health", get(health))
        .nest("/animals", animals::router())
        .nest("/incubation", incubation::router())
        .nest("/egg-collection", egg_collections::router())
        .nest("/feed-calculator", feed::router())
        .nest("/transactions", transactions::router())
        .route("/dashboard", get(dashboard::get))
}

/// Build the full application router: the record API, metrics and API docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        // Record API
        .nest("/api", api_router())
        // Prometheus scrape target
        .route("/metrics", get(observability::metrics))
        .with_state(state)
        // Swagger UI and the raw document
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                // request received
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // response sent, with status and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // failures (5xx) at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
