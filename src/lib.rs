//! Workspace umbrella crate for place document synthesis.
//!
//! This crate stitches together request validation, document construction
//! and administrative enrichment so callers can turn one set of query
//! parameters into an indexable place document with a single entry point,
//! [`synthesize`].
//!
//! ```
//! use placedoc::{synthesize, Layer, RawPlaceParams, StubResolver, SynthesisRequest};
//!
//! let params = RawPlaceParams::from_pairs([
//!     ("id", "id value"),
//!     ("name", "name value"),
//!     ("lat", "12.121212"),
//!     ("lon", "21.212121"),
//! ]);
//! let request = SynthesisRequest::new("datasource", Layer::Venue, params);
//! let resolver = StubResolver::empty();
//!
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let doc = rt.block_on(synthesize(request, &resolver)).unwrap();
//! assert_eq!(doc["name"]["default"], "name value");
//! ```

mod enrich;
mod generate;
mod metrics;
mod pipeline;

pub use admin::{
    AdminId, AdminMatch, AdminResolver, HttpResolver, LayerFilter, LayerMap, ResolveError,
    ResolverConfig, StartupError, StubResolver, WofDataDir,
};
pub use document::{
    AddressField, AddressParts, AdminHierarchy, CenterPoint, DocumentError, Layer, PlaceDocument,
};
pub use ingest::{IngestError, RawPlaceParams, RepeatedKeys, ValidatedPlace, validate};

pub use crate::enrich::{merge_hierarchy, resolve_hierarchy};
pub use crate::generate::{DEFAULT_LANG, generate};
pub use crate::metrics::{PipelineMetrics, set_pipeline_metrics};
pub use crate::pipeline::{
    Classification, PipelineError, PipelineStage, PipelineState, SynthesisRequest, synthesize,
};
