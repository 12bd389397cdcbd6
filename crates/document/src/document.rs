//! The canonical place document.
//!
//! A [`PlaceDocument`] is created once per request, enriched with its
//! administrative hierarchy, and turned into the output representation with
//! [`PlaceDocument::to_output`].
//!
//! # Output shape
//!
//! ```text
//! {
//!   "name":          { "default": <name> },
//!   "phrase":        { "default": <name> },
//!   "center_point":  { "lat": <f64>, "lon": <f64> },
//!   "source":        <source>,
//!   "layer":         "venue" | "address" | "street",
//!   "source_id":     <id>,
//!   "address_parts": { "number"?, "street"?, "zip"? },   # omitted when empty
//!   "parent":        { "<layer>": [..], "<layer>_id": [..], "<layer>_a": [..] }
//! }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use document::{AddressField, CenterPoint, Layer, PlaceDocument};
//!
//! let centroid = CenterPoint::new(12.121212, 21.212121).unwrap();
//! let mut doc = PlaceDocument::new("datasource", Layer::Venue, "id value", centroid);
//! doc.set_name("default", "name value");
//! doc.set_address(AddressField::Street, "street value");
//!
//! let out = doc.to_output().unwrap();
//! assert_eq!(out["phrase"]["default"], "name value");
//! assert_eq!(out["address_parts"]["street"], "street value");
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

use crate::address::{AddressField, AddressParts};
use crate::error::DocumentError;
use crate::layer::Layer;
use crate::parent::AdminHierarchy;
use crate::point::CenterPoint;

/// A place document ready for indexing.
///
/// The identity triple (`source`, `layer`, `source_id`) and the centroid are
/// fixed at construction and have no setters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceDocument {
    name: BTreeMap<String, String>,
    phrase: BTreeMap<String, String>,
    center_point: CenterPoint,
    source: String,
    layer: Layer,
    source_id: String,
    #[serde(skip_serializing_if = "AddressParts::is_empty")]
    address_parts: AddressParts,
    parent: AdminHierarchy,
}

impl PlaceDocument {
    pub fn new(
        source: impl Into<String>,
        layer: Layer,
        source_id: impl Into<String>,
        center_point: CenterPoint,
    ) -> Self {
        Self {
            name: BTreeMap::new(),
            phrase: BTreeMap::new(),
            center_point,
            source: source.into(),
            layer,
            source_id: source_id.into(),
            address_parts: AddressParts::default(),
            parent: AdminHierarchy::default(),
        }
    }

    /// Set a name variant. The same value is written to `phrase`.
    pub fn set_name(&mut self, lang: &str, value: impl Into<String>) {
        let value = value.into();
        self.phrase.insert(lang.to_string(), value.clone());
        self.name.insert(lang.to_string(), value);
    }

    pub fn set_address(&mut self, field: AddressField, value: impl Into<String>) {
        self.address_parts.set(field, value);
    }

    pub fn add_parent(
        &mut self,
        layer: &str,
        name: impl Into<String>,
        id: impl Into<String>,
        abbreviation: Option<String>,
    ) {
        self.parent.add(layer, name, id, abbreviation);
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn name(&self, lang: &str) -> Option<&str> {
        self.name.get(lang).map(String::as_str)
    }

    pub fn phrase(&self, lang: &str) -> Option<&str> {
        self.phrase.get(lang).map(String::as_str)
    }

    pub fn center_point(&self) -> CenterPoint {
        self.center_point
    }

    pub fn address_parts(&self) -> &AddressParts {
        &self.address_parts
    }

    pub fn parent(&self) -> &AdminHierarchy {
        &self.parent
    }

    /// Convert to the structured output representation.
    pub fn to_output(&self) -> Result<serde_json::Value, DocumentError> {
        serde_json::to_value(self).map_err(|e| DocumentError::Serialize(e.to_string()))
    }
}
