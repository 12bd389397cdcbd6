use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use metrics_exporter_prometheus::PrometheusHandle;
use placedoc::{AdminResolver, HttpResolver, WofDataDir};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Administrative lookup shared by every request
    pub resolver: Arc<dyn AdminResolver>,

    /// Present when the Prometheus recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create new server state.
    ///
    /// Fails unless `wof_dir` is set and holds Who's on First data; the server
    /// must not accept requests without it. The HTTP resolver never reads the
    /// directory itself. The check guards the co-located point-in-polygon
    /// service that loads its polygons from the same data.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let wof_dir = config
            .wof_dir
            .as_ref()
            .ok_or_else(|| ServerError::Config("wof_dir is not set".to_string()))?;
        WofDataDir::open(wof_dir)?;

        let resolver = HttpResolver::new(&config.resolver)?;
        tracing::info!(endpoint = resolver.endpoint(), "resolver_configured");

        Ok(Self::with_resolver(config, Arc::new(resolver)))
    }

    /// Create state around an already-built resolver. Skips the data
    /// directory check.
    pub fn with_resolver(config: ServerConfig, resolver: Arc<dyn AdminResolver>) -> Self {
        Self {
            config: Arc::new(config),
            resolver,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
