//! hellod — static-JSON demo endpoints with request metrics.
//!
//! Boot sequence: tracing init, config resolution, state + router build,
//! bind and serve. The config file is optional for the demo; a present but
//! invalid file aborts startup.

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use hellod_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::var("HELLOD_CONFIG").unwrap_or_else(|_| "hellod.yaml".to_string());
    let cfg = config::load_or_default(&path).expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg);
    let route_count = hellod_core::routes::effective_routes().len();
    let metrics_enabled = state.cfg().metrics.enabled;
    let app = router::build_router(state);

    tracing::info!(%listen, route_count, metrics_enabled, "hellod starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
