use std::net::SocketAddr;

use axum::Router;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::{routes, state::ServerState};

struct TestApp {
    base_url: String,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Serve the router on an ephemeral port backed by a fresh in-memory database.
async fn start_server() -> anyhow::Result<TestApp> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), min_connections: 1, ..DatabaseConfig::default() };
    let db = models::db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;

    let app: Router = routes::build_router(ServerState { db }, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().build().expect("reqwest client")
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(app.url("/api/health")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({"status": "healthy", "app": "Gallinapp", "version": "1.0"}));
    Ok(())
}

#[tokio::test]
async fn e2e_animal_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let created: Value = c
        .post(app.url("/api/animals"))
        .json(&json!({
            "lot": "Lote-Norte",
            "animal_type": "laying",
            "breed": "Hy-Line",
            "count": 250,
            "intake_date": "2024-02-10",
            "age_days": 90,
            "avg_weight": 1.4,
            "notes": "galpón 2"
        }))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    let id = created["id"].as_str().expect("id").to_string();
    assert_eq!(created["notes"], "galpón 2");

    let res = c.put(app.url(&format!("/api/animals/{id}"))).json(&json!({"age_days": 91})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated: Value = res.json().await?;
    assert_eq!(updated["age_days"], 91);
    assert_eq!(updated["count"], 250);
    assert_eq!(updated["notes"], "galpón 2");

    let res = c.delete(app.url(&format!("/api/animals/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = c.get(app.url(&format!("/api/animals/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Not Found");
    Ok(())
}

#[tokio::test]
async fn e2e_feed_and_balance() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let calc: Value = c
        .post(app.url("/api/feed-calculator"))
        .json(&json!({
            "lot": "Lote-Sur",
            "animal_type": "broiler",
            "animal_count": 200,
            "age_days": 25,
            "avg_weight": 1.2,
            "feed_price_per_kg": 0.6
        }))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert!((calc["estimated_cost"].as_f64().unwrap_or_default() - 360.0).abs() < 1e-9);

    for (kind, total) in [("income", 350.0), ("expense", 250.0)] {
        let res = c
            .post(app.url("/api/transactions"))
            .json(&json!({
                "date": "2024-06-10",
                "type": kind,
                "concept": "movement",
                "category": "general",
                "unit_price": total,
                "total": total
            }))
            .send()
            .await?;
        assert_eq!(res.status(), HttpStatusCode::OK);
    }

    let balance: Value = c.get(app.url("/api/transactions/balance")).send().await?.json().await?;
    assert_eq!(balance["total_income"], 350.0);
    assert_eq!(balance["total_expense"], 250.0);
    assert_eq!(balance["balance"], 100.0);
    Ok(())
}

#[tokio::test]
async fn e2e_validation_envelope() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(app.url("/api/egg-collection"))
        .json(&json!({
            "date": "2024-06-10",
            "source_lot": "",
            "egg_type": "commercial",
            "count": 12,
            "total_weight": -1.0
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Validation Error");
    let fields: Vec<&str> = body["fields"].as_array().unwrap().iter().filter_map(|f| f["field"].as_str()).collect();
    assert_eq!(fields, vec!["source_lot", "total_weight"]);
    Ok(())
}

#[tokio::test]
async fn e2e_metrics_exposed() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    c.post(app.url("/api/incubation"))
        .json(&json!({
            "lot": "INC-1",
            "egg_type": "laying",
            "breed": "Isa Brown",
            "egg_count": 60,
            "incubation_date": "2024-06-01",
            "expected_hatch_date": "2024-06-22"
        }))
        .send()
        .await?
        .error_for_status()?;

    let res = c.get(app.url("/metrics")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let text = res.text().await?;
    assert!(text.contains("gallinapp_records_created_total{kind=\"incubation_batch\"}"));
    Ok(())
}
