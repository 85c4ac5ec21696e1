// Gateway configuration
// Defaults, then an optional config file, then GATEWAY__* environment variables

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Listen address for the HTTP server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3000,
        }
    }
}

/// Headers returned on a CORS preflight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    pub allow_origin: String,
    pub allow_methods: String,
    pub allow_headers: String,
    pub max_age_secs: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origin: "*".to_string(),
            allow_methods: "*".to_string(),
            allow_headers: "*".to_string(),
            max_age_secs: 600,
        }
    }
}

/// Gateway configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GatewayConfig {
    pub server: ServerConfig,
    /// The one path that serves GraphQL; everything else is 404
    pub endpoint_path: String,
    pub max_body_bytes: usize,
    /// Deadline covering body read and execution. No deadline when unset.
    pub request_timeout_secs: Option<u64>,
    pub cors: CorsConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            endpoint_path: "/graphql".to_string(),
            max_body_bytes: 1024 * 1024,
            request_timeout_secs: None,
            cors: CorsConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Environment variable prefix, e.g. `GATEWAY__SERVER__PORT=4000`
    pub const ENV_PREFIX: &'static str = "GATEWAY";

    /// Load configuration layered over the defaults.
    ///
    /// With no explicit path, `gateway.toml` in the working directory is read
    /// if it exists.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&GatewayConfig::default())
            .context("failed to serialize default configuration")?;

        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name("gateway").required(false),
        };

        let loaded: GatewayConfig = Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                Environment::with_prefix(Self::ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("failed to load configuration")?
            .try_deserialize()
            .context("invalid configuration")?;

        loaded.validate()?;
        Ok(loaded)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.endpoint_path.starts_with('/') {
            bail!(
                "endpoint_path must start with '/', got {:?}",
                self.endpoint_path
            );
        }
        if self.endpoint_path.contains(&[':', '*'][..]) {
            bail!(
                "endpoint_path must be a literal path without ':' or '*', got {:?}",
                self.endpoint_path
            );
        }
        if self.max_body_bytes == 0 {
            bail!("max_body_bytes must be greater than zero");
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Base URL of the GraphQL endpoint, for logging
    pub fn endpoint_url(&self) -> String {
        format!(
            "http://{}:{}{}",
            self.server.host, self.server.port, self.endpoint_path
        )
    }
}
