//! Axum router wiring.
//!
//! Consumes the effective route table into GET routes serving their literal
//! payloads, mounts the operational endpoints, and installs the counting
//! layer when metrics are enabled.

use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::{get, MethodRouter};
use axum::Router;

use hellod_core::routes::{self, RouteMethod, RouteSpec};

use crate::app_state::AppState;
use crate::obs::track::TrackLayer;
use crate::ops;

pub fn build_router(state: AppState) -> Router {
    let mut app = Router::new();
    for spec in routes::effective_routes() {
        app = app.route(spec.path, method_route(spec));
    }
    app = app.route("/healthz", get(ops::healthz));

    if state.cfg().metrics.enabled {
        app = app
            .route(ops::METRICS_PATH, get(ops::metrics))
            .layer(TrackLayer::new(
                state.metrics(),
                state.cfg().metrics.track_self,
            ));
    }

    app.with_state(state)
}

fn method_route(spec: &'static RouteSpec) -> MethodRouter<AppState> {
    match spec.method {
        RouteMethod::Get => get(move || async move { static_payload(spec) }),
    }
}

/// Serve the declared payload byte-for-byte as JSON.
fn static_payload(spec: &'static RouteSpec) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], spec.payload)
}
