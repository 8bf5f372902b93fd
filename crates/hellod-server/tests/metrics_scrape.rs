//! Metrics behavior through the full router: counting, self-scrape policy,
//! and the exposition surface.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use hellod_server::app_state::AppState;
use hellod_server::config::{self, ServiceConfig};
use hellod_server::router::build_router;

fn state_with(cfg: ServiceConfig) -> AppState {
    AppState::new(cfg)
}

fn default_state() -> AppState {
    state_with(ServiceConfig::default())
}

async fn send(app: &Router, method: &str, path: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn scrape(app: &Router) -> String {
    let res = send(app, "GET", "/metrics").await;
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn counts_requests_per_method_and_endpoint() {
    let app = build_router(default_state());

    for _ in 0..3 {
        let res = send(&app, "GET", "/test").await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    let text = scrape(&app).await;
    assert!(text.contains("# HELP http_requests_total "));
    assert!(text.contains("# TYPE http_requests_total counter"));
    assert!(text.contains(r#"http_requests_total{method="GET",endpoint="/test"} 3"#));
}

#[tokio::test]
async fn scrape_content_type_is_plain_text() {
    let app = build_router(default_state());
    let res = send(&app, "GET", "/metrics").await;
    let ct = res.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(ct.contains("text/plain"));
}

#[tokio::test]
async fn scrapes_are_not_counted_by_default() {
    let app = build_router(default_state());

    scrape(&app).await;
    let second = scrape(&app).await;
    assert!(!second.contains(r#"endpoint="/metrics""#));
}

#[tokio::test]
async fn scrapes_count_themselves_when_configured() {
    let cfg = config::load_from_str("version: 1\nmetrics:\n  track_self: true\n").unwrap();
    let app = build_router(state_with(cfg));

    scrape(&app).await;
    // The count lands after the response is produced, so the second scrape
    // sees exactly the first one.
    let second = scrape(&app).await;
    assert!(second.contains(r#"http_requests_total{method="GET",endpoint="/metrics"} 1"#));
}

#[tokio::test]
async fn method_not_allowed_counts_under_matched_path() {
    let app = build_router(default_state());

    let res = send(&app, "POST", "/").await;
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);

    let text = scrape(&app).await;
    assert!(text.contains(r#"http_requests_total{method="POST",endpoint="/"} 1"#));
}

#[tokio::test]
async fn unmatched_requests_are_not_counted() {
    let state = default_state();
    let app = build_router(state.clone());

    let res = send(&app, "GET", "/nope").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let text = scrape(&app).await;
    assert!(!text.contains("/nope"));
    assert_eq!(state.metrics().http_requests.get("GET", "/nope"), 0);
}

#[tokio::test]
async fn disabled_metrics_unmounts_the_exporter() {
    let cfg = config::load_from_str("version: 1\nmetrics:\n  enabled: false\n").unwrap();
    let state = state_with(cfg);
    let app = build_router(state.clone());

    let res = send(&app, "GET", "/").await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = send(&app, "GET", "/metrics").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // No counting layer is installed either.
    assert_eq!(state.metrics().http_requests.get("GET", "/"), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_count_exactly() {
    let state = default_state();
    let app = build_router(state.clone());

    let mut tasks = Vec::new();
    for _ in 0..60 {
        let app = app.clone();
        tasks.push(tokio::spawn(async move {
            let res = app
                .oneshot(
                    Request::builder()
                        .uri("/work")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::OK);
        }));
    }
    for t in tasks {
        t.await.unwrap();
    }

    assert_eq!(state.metrics().http_requests.get("GET", "/work"), 60);
    assert_eq!(state.metrics().in_flight.get(), 0);
}

#[tokio::test]
async fn counter_is_monotonic_across_scrapes() {
    let state = default_state();
    let app = build_router(state.clone());

    send(&app, "GET", "/").await;
    let before = state.metrics().http_requests.get("GET", "/");

    send(&app, "GET", "/").await;
    send(&app, "GET", "/").await;

    assert_eq!(state.metrics().http_requests.get("GET", "/"), before + 2);
}
