use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use placedoc::{synthesize, Layer, RawPlaceParams, SynthesisRequest};
use std::sync::Arc;

/// `GET /synthesize/{source}/{layer}`
///
/// Layers other than `venue`, `address` and `street` are a routing miss and
/// answer 404 without touching validation. So are path segments that do not
/// decode as UTF-8.
pub async fn synthesize_place(
    State(state): State<Arc<ServerState>>,
    path: Result<Path<(String, String)>, PathRejection>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ServerResult<Json<serde_json::Value>> {
    let Path((source, layer)) = path.map_err(|rejection| {
        tracing::debug!(error = %rejection, "synthesize_path_rejected");
        ServerError::NotFound
    })?;
    let layer: Layer = layer.parse().map_err(|_| ServerError::NotFound)?;

    let request = SynthesisRequest::new(source, layer, RawPlaceParams::from_pairs(pairs));
    let document = synthesize(request, state.resolver.as_ref()).await?;

    Ok(Json(document))
}
