use async_trait::async_trait;
use document::CenterPoint;

use crate::error::ResolveError;
use crate::types::{LayerFilter, LayerMap};

/// Point-in-polygon lookup of the administrative areas containing a point.
///
/// Implementations own whatever geographic data they need and must be safe to
/// share across concurrent requests. A lookup either yields the full layer
/// map or an error; there is no partial result alongside a failure.
#[async_trait]
pub trait AdminResolver: Send + Sync {
    async fn lookup(
        &self,
        centroid: CenterPoint,
        layers: &LayerFilter,
    ) -> Result<LayerMap, ResolveError>;

    /// Short label used in logs.
    fn name(&self) -> &'static str {
        "resolver"
    }
}
