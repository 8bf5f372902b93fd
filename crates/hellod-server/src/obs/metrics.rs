//! Request metrics registry.
//!
//! Counters are keyed by (method, endpoint) in a `DashMap` and rendered in
//! Prometheus text exposition format. Samples are snapshotted into a sorted
//! vector before rendering so repeated scrapes of the same state are
//! byte-identical.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Per-route request counter: one monotonic sample per (method, endpoint).
#[derive(Default)]
pub struct RequestCounter {
    map: DashMap<(String, String), AtomicU64>,
}

impl RequestCounter {
    /// Increment by 1.
    pub fn inc(&self, method: &str, endpoint: &str) {
        self.add(method, endpoint, 1);
    }

    /// Increment by an arbitrary value, creating the sample on first touch.
    /// Creation goes through the map's entry API, so concurrent first-writes
    /// of the same label pair resolve to exactly one sample and no increment
    /// is lost.
    pub fn add(&self, method: &str, endpoint: &str, v: u64) {
        let key = (method.to_string(), endpoint.to_string());
        let counter = self.map.entry(key).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value for a label pair (0 if the sample does not exist).
    pub fn get(&self, method: &str, endpoint: &str) -> u64 {
        self.map
            .get(&(method.to_string(), endpoint.to_string()))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render in Prometheus text exposition format, samples sorted by
    /// (method, endpoint). Descriptor lines are emitted even when no sample
    /// exists yet.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} counter", name);

        let mut samples: Vec<((String, String), u64)> = self
            .map
            .iter()
            .map(|r| (r.key().clone(), r.value().load(Ordering::Relaxed)))
            .collect();
        samples.sort();

        for ((method, endpoint), val) in samples {
            let _ = writeln!(
                out,
                "{}{{method=\"{}\",endpoint=\"{}\"}} {}",
                name,
                escape_label(&method),
                escape_label(&endpoint),
                val
            );
        }
    }
}

/// Label-less signed gauge.
#[derive(Default)]
pub struct Gauge {
    v: AtomicI64,
}

impl Gauge {
    /// Increment by 1.
    pub fn inc(&self) {
        self.v.fetch_add(1, Ordering::Relaxed);
    }

    /// Decrement by 1.
    pub fn dec(&self) {
        self.v.fetch_sub(1, Ordering::Relaxed);
    }

    /// Current value.
    pub fn get(&self) -> i64 {
        self.v.load(Ordering::Relaxed)
    }

    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} gauge", name);
        let _ = writeln!(out, "{} {}", name, self.get());
    }
}

/// Process-wide metrics registry, dependency-injected via `AppState`.
#[derive(Default)]
pub struct ServiceMetrics {
    pub http_requests: RequestCounter,
    pub in_flight: Gauge,
}

impl ServiceMetrics {
    /// Snapshot every registered metric as exposition text. Rendering reads
    /// the registry as it is at the moment of the call and never increments
    /// anything itself.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.http_requests.render(
            "http_requests_total",
            "Total HTTP requests handled, by method and matched endpoint.",
            &mut out,
        );
        self.in_flight.render(
            "http_requests_in_flight",
            "Requests currently being handled.",
            &mut out,
        );
        out
    }
}
