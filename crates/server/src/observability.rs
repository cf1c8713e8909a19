use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};
use tracing::error;

// Prometheus metrics (default registry)
pub static RECORDS_CREATED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "gallinapp_records_created_total",
        "Records created, by record kind",
        &["kind"]
    )
    .expect("register records_created_total")
});

pub static RECORDS_DELETED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "gallinapp_records_deleted_total",
        "Records deleted, by record kind",
        &["kind"]
    )
    .expect("register records_deleted_total")
});

pub static FEED_CALCULATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "gallinapp_feed_calculations_total",
        "Feed calculations performed, by animal type",
        &["animal_type"]
    )
    .expect("register feed_calculations_total")
});

pub fn record_created(kind: &str) {
    RECORDS_CREATED_TOTAL.with_label_values(&[kind]).inc();
}

pub fn record_deleted(kind: &str) {
    RECORDS_DELETED_TOTAL.with_label_values(&[kind]).inc();
}

pub fn feed_calculated(animal_type: &str) {
    FEED_CALCULATIONS_TOTAL.with_label_values(&[animal_type]).inc();
}

/// Render the default registry in the Prometheus text format.
pub fn render() -> Result<String, prometheus::Error> {
    // Touch the lazies so the families are listed before the first increment.
    Lazy::force(&RECORDS_CREATED_TOTAL);
    Lazy::force(&RECORDS_DELETED_TOTAL);
    Lazy::force(&FEED_CALCULATIONS_TOTAL);

    let metric_families = prometheus::gather();
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

pub async fn metrics() -> impl IntoResponse {
    match render() {
        Ok(body) => (StatusCode::OK, [(header::CONTENT_TYPE, TextEncoder::new().format_type().to_string())], body),
        Err(e) => {
            error!(err = %e, "metrics encoding failed");
            (StatusCode::INTERNAL_SERVER_ERROR, [(header::CONTENT_TYPE, "text/plain".to_string())], e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_show_up_in_output() {
        record_created("animal");
        feed_calculated("broiler");
        let out = render().unwrap();
        assert!(out.contains("gallinapp_records_created_total{kind=\"animal\"}"));
        assert!(out.contains("gallinapp_feed_calculations_total{animal_type=\"broiler\"}"));
    }
}
