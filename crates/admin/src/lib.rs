//! Administrative hierarchy lookup.
//!
//! Given a centroid, an [`AdminResolver`] reports which administrative areas
//! (country, region, locality and so on) contain it. The pipeline treats the
//! resolver as an opaque async capability; this crate provides the contract
//! plus two implementations:
//!
//! - [`HttpResolver`] talks to a remote point-in-polygon service.
//! - [`StubResolver`] replays a canned answer and records calls.
//!
//! It also owns the startup check for the boundary data directory
//! ([`WofDataDir`]), since the lookup service is useless without it.
//!
//! ```
//! use admin::{AdminMatch, AdminResolver, LayerFilter, LayerMap, StubResolver};
//! use document::CenterPoint;
//!
//! let layers: LayerMap = [("country", vec![AdminMatch::new(18, "country name")])]
//!     .into_iter()
//!     .collect();
//! let resolver = StubResolver::returning(layers);
//! let centroid = CenterPoint::new(12.121212, 21.212121).unwrap();
//!
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let found = rt.block_on(resolver.lookup(centroid, &LayerFilter::All)).unwrap();
//! assert_eq!(found.get("country").unwrap()[0].id.to_string(), "18");
//! ```

mod error;
mod http;
mod resolver;
mod stub;
mod types;
mod wof;

pub use crate::error::{ResolveError, StartupError};
pub use crate::http::{HttpResolver, ResolverConfig};
pub use crate::resolver::AdminResolver;
pub use crate::stub::StubResolver;
pub use crate::types::{AdminId, AdminMatch, LayerFilter, LayerMap};
pub use crate::wof::WofDataDir;
