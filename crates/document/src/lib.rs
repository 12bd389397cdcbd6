//! Place document model.
//!
//! This crate defines the canonical document that the synthesis pipeline
//! produces: identity (`source`, `layer`, `source_id`), names, a finite
//! centroid, optional address parts and the administrative hierarchy.
//!
//! ## Pure data
//!
//! No I/O and no validation of request input happens here. Request parameters
//! are checked by the ingest crate; the only invariant this crate enforces by
//! construction is that a [`CenterPoint`] is always finite.
//!
//! ## Determinism
//!
//! Names are kept in sorted maps and the hierarchy keeps insertion order, so
//! the same sequence of calls always serializes to the same bytes.

mod address;
mod document;
mod error;
mod layer;
mod parent;
mod point;

pub use crate::address::{AddressField, AddressParts};
pub use crate::document::PlaceDocument;
pub use crate::error::DocumentError;
pub use crate::layer::Layer;
pub use crate::parent::AdminHierarchy;
pub use crate::point::CenterPoint;
