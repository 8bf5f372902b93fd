use std::net::SocketAddr;

use serde::Deserialize;

use hellod_core::error::{HellodError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub metrics: MetricsSection,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            metrics: MetricsSection::default(),
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(HellodError::UnsupportedVersion);
        }
        self.server.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen.parse::<SocketAddr>().map_err(|_| {
            HellodError::InvalidConfig("server.listen must be a valid socket address".into())
        })?;
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8000".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    /// When off, `/metrics` is not mounted and no requests are counted.
    #[serde(default = "default_metrics_enabled")]
    pub enabled: bool,

    /// Whether `/metrics` scrapes count toward their own series.
    #[serde(default)]
    pub track_self: bool,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self {
            enabled: default_metrics_enabled(),
            track_self: false,
        }
    }
}

fn default_metrics_enabled() -> bool {
    true
}
