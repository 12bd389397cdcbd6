//! Resolver backed by a remote point-in-polygon service.
//!
//! Requests look like `GET {endpoint}/{lon}/{lat}` with an optional
//! `?layers=country,region` restriction. A 2xx JSON body is the layer map;
//! any other status carries the service's own error text, which is surfaced
//! unchanged.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use document::CenterPoint;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ResolveError, StartupError};
use crate::resolver::AdminResolver;
use crate::types::{LayerFilter, LayerMap};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Base URL of the lookup service.
    pub endpoint: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:4200".to_string(),
            timeout_secs: 10,
            connect_timeout_secs: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpResolver {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpResolver {
    pub fn new(config: &ResolverConfig) -> Result<Self, StartupError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| StartupError::ResolverClient(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub(crate) fn lookup_url(&self, centroid: CenterPoint, layers: &LayerFilter) -> String {
        let mut url = format!("{}/{}/{}", self.endpoint, centroid.lon(), centroid.lat());
        if let LayerFilter::Only(names) = layers {
            if !names.is_empty() {
                url.push_str("?layers=");
                url.push_str(&names.join(","));
            }
        }
        url
    }
}

#[async_trait]
impl AdminResolver for HttpResolver {
    async fn lookup(
        &self,
        centroid: CenterPoint,
        layers: &LayerFilter,
    ) -> Result<LayerMap, ResolveError> {
        let url = self.lookup_url(centroid, layers);
        let start = Instant::now();

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "resolver_unreachable");
            ResolveError::Transport(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ResolveError::Transport(e.to_string()))?;

        debug!(
            url = %url,
            status = status.as_u16(),
            elapsed_micros = start.elapsed().as_micros(),
            "resolver_response"
        );

        if !status.is_success() {
            return Err(ResolveError::Lookup(body));
        }

        serde_json::from_str(&body).map_err(|e| ResolveError::Decode(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
