//! Administrative hierarchy attached to a document.
//!
//! Each administrative layer (`country`, `region`, ...) owns three parallel
//! sequences that always have the same length:
//!
//! ```text
//! <layer>      names
//! <layer>_id   ids, as strings
//! <layer>_a    abbreviations, null when the match had none
//! ```
//!
//! Layers keep the order in which they were first added, and serialize flat in
//! that order.

use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
struct ParentLayer {
    layer: String,
    names: Vec<String>,
    ids: Vec<String>,
    abbreviations: Vec<Option<String>>,
}

/// Ordered administrative hierarchy (`parent` in the output document).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminHierarchy {
    layers: Vec<ParentLayer>,
}

impl AdminHierarchy {
    /// Append one parent to `layer`, creating the layer on first use.
    pub fn add(
        &mut self,
        layer: &str,
        name: impl Into<String>,
        id: impl Into<String>,
        abbreviation: Option<String>,
    ) {
        let entry = match self.layers.iter().position(|entry| entry.layer == layer) {
            Some(idx) => &mut self.layers[idx],
            None => {
                self.layers.push(ParentLayer {
                    layer: layer.to_string(),
                    names: Vec::new(),
                    ids: Vec::new(),
                    abbreviations: Vec::new(),
                });
                let last = self.layers.len() - 1;
                &mut self.layers[last]
            }
        };
        entry.names.push(name.into());
        entry.ids.push(id.into());
        entry.abbreviations.push(abbreviation);
    }

    /// Layer names in insertion order.
    pub fn layers(&self) -> impl Iterator<Item = &str> {
        self.layers.iter().map(|entry| entry.layer.as_str())
    }

    pub fn names(&self, layer: &str) -> Option<&[String]> {
        self.find(layer).map(|entry| entry.names.as_slice())
    }

    pub fn ids(&self, layer: &str) -> Option<&[String]> {
        self.find(layer).map(|entry| entry.ids.as_slice())
    }

    pub fn abbreviations(&self, layer: &str) -> Option<&[Option<String>]> {
        self.find(layer).map(|entry| entry.abbreviations.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    fn find(&self, layer: &str) -> Option<&ParentLayer> {
        self.layers.iter().find(|entry| entry.layer == layer)
    }
}

impl Serialize for AdminHierarchy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.layers.len() * 3))?;
        for entry in &self.layers {
            map.serialize_entry(&entry.layer, &entry.names)?;
            map.serialize_entry(&format!("{}_id", entry.layer), &entry.ids)?;
            map.serialize_entry(&format!("{}_a", entry.layer), &entry.abbreviations)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_abbreviation_is_explicit_null() {
        let mut parent = AdminHierarchy::default();
        parent.add("region", "region name", "17", None);
        parent.add("country", "country name", "18", Some("country abbr".into()));

        assert_eq!(
            serde_json::to_string(&parent).unwrap(),
            concat!(
                r#"{"region":["region name"],"region_id":["17"],"region_a":[null],"#,
                r#""country":["country name"],"country_id":["18"],"country_a":["country abbr"]}"#
            )
        );
    }

    #[test]
    fn repeated_layer_appends_in_parallel() {
        let mut parent = AdminHierarchy::default();
        parent.add("locality", "first", "1", None);
        parent.add("locality", "second", "2", Some("S".into()));

        assert_eq!(parent.layers().collect::<Vec<_>>(), vec!["locality"]);
        assert_eq!(parent.names("locality").unwrap(), ["first", "second"]);
        assert_eq!(parent.ids("locality").unwrap(), ["1", "2"]);
        assert_eq!(
            parent.abbreviations("locality").unwrap(),
            [None, Some("S".to_string())]
        );
    }

    #[test]
    fn empty_hierarchy_serializes_as_empty_object() {
        let parent = AdminHierarchy::default();
        assert!(parent.is_empty());
        assert_eq!(serde_json::to_string(&parent).unwrap(), "{}");
    }
}
