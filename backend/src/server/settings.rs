//! Service settings loaded via OrthoConfig.
//!
//! Values layer defaults, an optional configuration file, `RECORDS_*`
//! environment variables and command-line flags.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use backend::domain::RecordLimits;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_MAX_ERRORS: f64 = 1000.0;

/// Configuration values for the record service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RECORDS")]
pub struct ServerSettings {
    /// Interface to listen on.
    pub host: Option<IpAddr>,
    /// TCP port to listen on.
    #[ortho_config(default = 7777)]
    pub port: u16,
    /// Largest `limit` a single request may ask for.
    #[ortho_config(default = 1000)]
    pub max_limit: u32,
    /// Largest error budget a single request may ask for.
    pub max_errors: Option<f64>,
}

impl ServerSettings {
    /// Return the socket address to bind, falling back to `0.0.0.0:7777`.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host.unwrap_or(DEFAULT_HOST), self.port)
    }

    /// Return the per-request ceilings; `max_errors` falls back to 1000.
    #[must_use]
    pub fn limits(&self) -> RecordLimits {
        RecordLimits::new(self.max_limit, self.max_errors.unwrap_or(DEFAULT_MAX_ERRORS))
    }
}
