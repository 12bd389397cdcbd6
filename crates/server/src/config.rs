use anyhow::Context;
use placedoc::ResolverConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Enable CORS
    #[serde(default)]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Metrics endpoint enabled
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,

    /// Who's on First data directory; must contain `meta` and `data`.
    #[serde(default)]
    pub wof_dir: Option<PathBuf>,

    /// Point-in-polygon service
    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            enable_cors: false,
            log_level: default_log_level(),
            metrics_enabled: default_true(),
            wof_dir: None,
            resolver: ResolverConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from `.env`, an optional `placedoc` config file and
    /// `PLACEDOC_*` environment variables, in increasing priority.
    ///
    /// Nested keys use `__`, e.g. `PLACEDOC_RESOLVER__ENDPOINT`. A plain
    /// `PORT` variable wins over everything else.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let builder = config::Config::builder()
            .add_source(config::File::with_name("placedoc").required(false))
            .add_source(
                config::Environment::with_prefix("PLACEDOC")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut config: ServerConfig = builder.build()?.try_deserialize()?;

        if let Ok(port) = std::env::var("PORT") {
            config.port = parse_port(&port)?;
        }

        Ok(config)
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn parse_port(raw: &str) -> anyhow::Result<u16> {
    raw.trim()
        .parse()
        .with_context(|| format!("PORT must be a port number, got {raw:?}"))
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
