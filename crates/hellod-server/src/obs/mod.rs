//! Lightweight in-process metrics.
//!
//! No metrics client crate is used; counters are atomics behind a `DashMap`
//! rendered straight to the Prometheus text format by the `/metrics`
//! handler. The counting layer in [`track`] feeds them.

pub mod metrics;
pub mod track;
