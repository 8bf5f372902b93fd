//! Shared application state.
//!
//! The metrics registry is owned here and handed to the router, the counting
//! layer, and the exporter explicitly. Nothing in the crate reaches for a
//! process-wide global.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::obs::metrics::ServiceMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<ServiceMetrics>,
}

struct AppStateInner {
    cfg: ServiceConfig,
}

impl AppState {
    pub fn new(cfg: ServiceConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg }),
            metrics: Arc::new(ServiceMetrics::default()),
        }
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> Arc<ServiceMetrics> {
        Arc::clone(&self.metrics)
    }
}
