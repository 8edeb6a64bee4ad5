//! HTTP API tests driving the router in-process.
#![cfg(feature = "http-server")]

mod support;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use ride_analytics::data::{DashboardData, ServerSettings};
use ride_analytics::http::{bind_listener, create_router, AppState};
use ride_analytics::models::{MetricsDocument, TripTable};
use serde_json::Value;
use tower::ServiceExt;

use support::{create_test_trip, FULL_METRICS};

fn sample_data(metrics: &str) -> DashboardData {
    let trips: TripTable = vec![
        create_test_trip("2023-01-05 02:00:00", 12.0, "Midtown", "winter"),
        create_test_trip("2023-01-06 04:30:00", 18.0, "SoHo", "winter"),
        create_test_trip("2023-01-07 19:00:00", 25.0, "Midtown", "winter"),
        create_test_trip("2023-07-01 08:00:00", 40.0, "Harlem", "summer"),
        create_test_trip("2023-07-02 03:00:00", 5.0, "Midtown", "summer"),
    ]
    .into_iter()
    .collect();
    DashboardData::new(trips, MetricsDocument::from_json_str(metrics).unwrap())
}

fn app(metrics: &str) -> Router {
    create_router(AppState::from(sample_data(metrics)))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(app(FULL_METRICS), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["trips"], 5);
    assert_eq!(body["metrics"], 5);
}

#[tokio::test]
async fn test_index_page() {
    let response = app(FULL_METRICS)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("/v1/dashboard"));
}

#[tokio::test]
async fn test_dashboard_defaults() {
    let (status, body) = get(app(FULL_METRICS), "/v1/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Ride Mini Analytics: Synthetic (50k+)");
    assert_eq!(body["summary"]["trip_count"], 5);
    assert_eq!(body["kpis"]["cards"].as_array().unwrap().len(), 4);
    assert_eq!(body["highlights"]["lines"][0]["display"], "42.0%");
    assert_eq!(body["filters"]["selected"]["hours"], serde_json::json!([0, 23]));
}

#[tokio::test]
async fn test_dashboard_with_filters() {
    let (status, body) = get(
        app(FULL_METRICS),
        "/v1/dashboard?seasons=winter&hour_min=0&hour_max=5",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["trip_count"], 2);
    assert_eq!(body["summary"]["revenue_display"], "$30");
    assert_eq!(
        body["charts"]["season_hour_heatmap"]["hours"],
        serde_json::json!([0, 1, 2, 3, 4, 5])
    );
}

#[tokio::test]
async fn test_charts_unknown_zone() {
    let (status, body) = get(app(FULL_METRICS), "/v1/charts?zones=Nowhere").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["trip_count"], 0);
    assert_eq!(body["summary"]["average_fare_display"], "n/a");
    assert_eq!(body["charts"]["top_zones"], serde_json::json!([]));
}

#[tokio::test]
async fn test_inverted_hours_is_bad_request() {
    let (status, body) = get(app(FULL_METRICS), "/v1/dashboard?hour_min=9&hour_max=3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_missing_metric_is_server_error() {
    let metrics = r#"{"top15_customers_share_rides": 0.42}"#;
    let (status, body) = get(app(metrics), "/v1/dashboard").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "MISSING_METRIC");

    let (status, _) = get(app(metrics), "/v1/highlights").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_kpis_ignore_filters() {
    let (status, body) = get(app(FULL_METRICS), "/v1/kpis").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_trips"], 5);
    assert_eq!(body["cards"][3]["delta"], "-12.0%");
}

#[tokio::test]
async fn test_filters_endpoint() {
    let (status, body) = get(app(FULL_METRICS), "/v1/filters").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["options"]["seasons"], serde_json::json!(["summer", "winter"]));
    assert_eq!(
        body["options"]["zones"],
        serde_json::json!(["Harlem", "Midtown", "SoHo"])
    );
    assert_eq!(body["selected"]["zones"], serde_json::json!([]));
}

#[tokio::test]
async fn test_bind_listener_resolves_host_names() {
    let settings = ServerSettings {
        host: "localhost".to_string(),
        port: 0,
    };
    let listener = bind_listener(&settings).await.unwrap();
    assert!(listener.local_addr().unwrap().ip().is_loopback());
}
