use std::sync::Mutex;

use async_trait::async_trait;
use document::CenterPoint;

use crate::error::ResolveError;
use crate::resolver::AdminResolver;
use crate::types::{LayerFilter, LayerMap};

/// In-process resolver that answers every lookup with the same canned result.
///
/// Each call is recorded so callers can assert on what was asked for. Handy
/// for tests, benches and running the server without a lookup service.
#[derive(Debug)]
pub struct StubResolver {
    response: Result<LayerMap, ResolveError>,
    calls: Mutex<Vec<(CenterPoint, LayerFilter)>>,
}

impl StubResolver {
    pub fn new(response: Result<LayerMap, ResolveError>) -> Self {
        Self {
            response,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Resolver that finds nothing anywhere.
    pub fn empty() -> Self {
        Self::new(Ok(LayerMap::new()))
    }

    pub fn returning(layers: LayerMap) -> Self {
        Self::new(Ok(layers))
    }

    pub fn failing(err: ResolveError) -> Self {
        Self::new(Err(err))
    }

    /// Lookups received so far, oldest first.
    pub fn calls(&self) -> Vec<(CenterPoint, LayerFilter)> {
        match self.calls.lock() {
            Ok(calls) => calls.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }
}

#[async_trait]
impl AdminResolver for StubResolver {
    async fn lookup(
        &self,
        centroid: CenterPoint,
        layers: &LayerFilter,
    ) -> Result<LayerMap, ResolveError> {
        let mut calls = match self.calls.lock() {
            Ok(calls) => calls,
            Err(poisoned) => poisoned.into_inner(),
        };
        calls.push((centroid, layers.clone()));
        drop(calls);

        self.response.clone()
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}
