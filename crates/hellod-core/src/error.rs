//! Shared error type across hellod crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, HellodError>;

/// Unified error type used by core and server.
///
/// Request-path errors (unknown route, wrong method) never reach this type;
/// the HTTP dispatcher answers those with its 404/405 defaults. What is left
/// is startup-time failure: config parsing and table introspection.
#[derive(Debug, Error)]
pub enum HellodError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}
