//! Request-counting middleware.
//!
//! `TrackLayer` wraps the router and records one count per completed request
//! against the matched route's declared path. It is purely an observability
//! side-channel: the response passes through with status, headers, and body
//! untouched.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::extract::{MatchedPath, Request};
use axum::response::Response;
use tower::{Layer, Service};

use super::metrics::ServiceMetrics;
use crate::ops::METRICS_PATH;

/// Layer configuration: the registry handle plus whether `/metrics` scrapes
/// count toward their own series.
#[derive(Clone)]
pub struct TrackLayer {
    metrics: Arc<ServiceMetrics>,
    track_self: bool,
}

impl TrackLayer {
    pub fn new(metrics: Arc<ServiceMetrics>, track_self: bool) -> Self {
        Self { metrics, track_self }
    }
}

impl<S> Layer<S> for TrackLayer {
    type Service = TrackService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TrackService {
            inner,
            metrics: Arc::clone(&self.metrics),
            track_self: self.track_self,
        }
    }
}

/// The interceptor itself.
///
/// Labels resolve from the matched route template (never the raw request
/// path), so parameterized routes cannot explode label cardinality. Requests
/// that matched no route carry no template and are skipped. The count lands
/// after the inner service resolves, whatever the outcome, so a
/// method-not-allowed rejection counts under its matched path and a
/// `/metrics` scrape never observes its own increment.
#[derive(Clone)]
pub struct TrackService<S> {
    inner: S,
    metrics: Arc<ServiceMetrics>,
    track_self: bool,
}

/// Holds the in-flight gauge up while a tracked request is being handled.
/// Dropping on cancellation still releases the slot.
struct InFlight(Arc<ServiceMetrics>);

impl InFlight {
    fn start(metrics: &Arc<ServiceMetrics>) -> Self {
        metrics.in_flight.inc();
        Self(Arc::clone(metrics))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.in_flight.dec();
    }
}

impl<S> Service<Request> for TrackService<S>
where
    S: Service<Request, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future =
        Pin<Box<dyn Future<Output = std::result::Result<S::Response, S::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<std::result::Result<(), S::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let track_self = self.track_self;
        let labels = req
            .extensions()
            .get::<MatchedPath>()
            .map(|m| (req.method().as_str().to_owned(), m.as_str().to_owned()))
            .filter(|(_, endpoint)| track_self || endpoint.as_str() != METRICS_PATH);

        let metrics = Arc::clone(&self.metrics);
        let guard = labels.as_ref().map(|_| InFlight::start(&metrics));

        let fut = self.inner.call(req);
        Box::pin(async move {
            let res = fut.await;
            if let Some((method, endpoint)) = labels {
                drop(guard);
                metrics.http_requests.inc(&method, &endpoint);
            }
            res
        })
    }
}
