//! Resolver result types.
//!
//! The resolver answers with a JSON object keyed by administrative layer:
//!
//! ```json
//! {
//!   "region":  [{ "id": 17, "name": "region name" }],
//!   "country": [{ "id": 18, "name": "country name", "abbr": "country abbr" }]
//! }
//! ```
//!
//! Key order is significant: it decides the order layers appear in a
//! document's `parent`. [`LayerMap`] therefore keeps entries in the order they
//! were read instead of sorting them.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of an administrative area.
///
/// Resolvers emit numeric ids, but string ids are accepted too. Either way
/// the `Display` form is what lands in `<layer>_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdminId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for AdminId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminId::Number(n) => write!(f, "{n}"),
            AdminId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for AdminId {
    fn from(value: u64) -> Self {
        AdminId::Number(value.into())
    }
}

impl From<&str> for AdminId {
    fn from(value: &str) -> Self {
        AdminId::Text(value.to_string())
    }
}

/// One candidate area for a layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminMatch {
    pub id: AdminId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbr: Option<String>,
}

impl AdminMatch {
    pub fn new(id: impl Into<AdminId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            abbr: None,
        }
    }

    pub fn with_abbr(mut self, abbr: impl Into<String>) -> Self {
        self.abbr = Some(abbr.into());
        self
    }
}

/// Layer name to candidate list, in response order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerMap {
    entries: Vec<(String, Vec<AdminMatch>)>,
}

impl LayerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a layer, or replaces its candidates in place if already present.
    pub fn insert(&mut self, layer: impl Into<String>, matches: Vec<AdminMatch>) {
        let layer = layer.into();
        match self.entries.iter_mut().find(|(name, _)| *name == layer) {
            Some((_, existing)) => *existing = matches,
            None => self.entries.push((layer, matches)),
        }
    }

    pub fn get(&self, layer: &str) -> Option<&[AdminMatch]> {
        self.entries
            .iter()
            .find(|(name, _)| name == layer)
            .map(|(_, matches)| matches.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[AdminMatch])> {
        self.entries
            .iter()
            .map(|(name, matches)| (name.as_str(), matches.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for LayerMap {
    type Item = (String, Vec<AdminMatch>);
    type IntoIter = std::vec::IntoIter<(String, Vec<AdminMatch>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<L: Into<String>> FromIterator<(L, Vec<AdminMatch>)> for LayerMap {
    fn from_iter<T: IntoIterator<Item = (L, Vec<AdminMatch>)>>(iter: T) -> Self {
        let mut map = LayerMap::new();
        for (layer, matches) in iter {
            map.insert(layer, matches);
        }
        map
    }
}

impl Serialize for LayerMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
    }
}

impl<'de> Deserialize<'de> for LayerMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LayerMapVisitor;

        impl<'de> Visitor<'de> for LayerMapVisitor {
            type Value = LayerMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of layer name to matches")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<LayerMap, A::Error> {
                let mut map = LayerMap::new();
                while let Some((layer, matches)) =
                    access.next_entry::<String, Vec<AdminMatch>>()?
                {
                    map.insert(layer, matches);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(LayerMapVisitor)
    }
}

/// Which administrative layers a lookup should consider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LayerFilter {
    /// No restriction; the resolver decides what to return.
    #[default]
    All,
    Only(Vec<String>),
}

impl LayerFilter {
    pub fn is_all(&self) -> bool {
        matches!(self, LayerFilter::All)
    }
}
