//! hellod server library entry.
//!
//! This crate wires the config loader, application state, router, counting
//! middleware, and operational endpoints into the demo service. It is
//! intended to be consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
