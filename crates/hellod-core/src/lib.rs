//! hellod core: the declared route surface and shared error types.
//!
//! This crate holds the static route table the server consumes and the error
//! surface shared by the config loader and introspection helpers. It
//! intentionally carries no HTTP or runtime dependencies so the table can be
//! inspected and tested without starting a server.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `HellodError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod routes;

/// Shared result type.
pub use error::{HellodError, Result};
