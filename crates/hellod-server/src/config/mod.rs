//! Service config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use hellod_core::error::{HellodError, Result};

pub use schema::{MetricsSection, ServerSection, ServiceConfig};

pub fn load_from_file(path: &str) -> Result<ServiceConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| HellodError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig = serde_yaml::from_str(s)
        .map_err(|e| HellodError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path` if it exists, otherwise fall back to built-in defaults.
/// A file that exists but fails to parse or validate is still a hard error.
pub fn load_or_default(path: &str) -> Result<ServiceConfig> {
    if Path::new(path).exists() {
        load_from_file(path)
    } else {
        Ok(ServiceConfig::default())
    }
}
