//! Request and output types for validation.

use document::{CenterPoint, Layer};
use serde::{Deserialize, Serialize};

/// Raw query parameters exactly as received.
///
/// Every field is optional; presence and shape are decided by
/// [`validate`](crate::validate).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPlaceParams {
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lon: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "housenumber")]
    pub house_number: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    /// Required keys that appeared more than once in the query.
    #[serde(skip)]
    pub repeated: RepeatedKeys,
}

/// Required keys sent more than once.
///
/// A repeated `lat`, `lon`, `name` or `id` has no single value, so it is
/// rejected with the same message as a missing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepeatedKeys {
    pub lat: bool,
    pub lon: bool,
    pub name: bool,
    pub id: bool,
}

impl RepeatedKeys {
    pub fn any(&self) -> bool {
        self.lat || self.lon || self.name || self.id
    }

    fn mark(&mut self, key: &str) {
        match key {
            "lat" => self.lat = true,
            "lon" => self.lon = true,
            "name" => self.name = true,
            "id" => self.id = true,
            _ => {}
        }
    }
}

impl RawPlaceParams {
    /// Builds parameters from decoded query pairs.
    ///
    /// A repeated `lat`, `lon`, `name` or `id` is recorded in
    /// [`repeated`](Self::repeated) and later rejected by validation. For the
    /// optional address keys the first occurrence wins. `housenumber` is
    /// accepted for `house_number`; the canonical key takes precedence when
    /// both appear. Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = RawPlaceParams::default();
        let mut house_number_alias: Option<String> = None;

        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "lat" => &mut params.lat,
                "lon" => &mut params.lon,
                "name" => &mut params.name,
                "id" => &mut params.id,
                "house_number" => &mut params.house_number,
                "housenumber" => &mut house_number_alias,
                "street" => &mut params.street,
                "postcode" => &mut params.postcode,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            } else {
                params.repeated.mark(key.as_ref());
            }
        }

        if params.house_number.is_none() {
            params.house_number = house_number_alias;
        }
        params
    }
}

/// Trimmed, layer-checked fields ready for document construction.
///
/// Optional address fields are `None` when they were blank in the request.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPlace {
    pub source: String,
    pub layer: Layer,
    pub source_id: String,
    pub name: String,
    pub center_point: CenterPoint,
    pub house_number: Option<String>,
    pub street: Option<String>,
    pub postcode: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_required_keys_are_recorded() {
        let params = RawPlaceParams::from_pairs([
            ("lat", "1"),
            ("lat", "2"),
            ("id", "a"),
            ("id", "a"),
            ("postalcode", "ignored"),
            ("name", "n"),
        ]);
        assert!(params.repeated.lat);
        assert!(params.repeated.id);
        assert!(!params.repeated.lon);
        assert!(!params.repeated.name);
        assert_eq!(params.name.as_deref(), Some("n"));
        assert_eq!(params.postcode, None);
    }

    #[test]
    fn repeated_address_keys_keep_first_value() {
        let params = RawPlaceParams::from_pairs([
            ("street", "first"),
            ("street", "second"),
            ("postcode", "1"),
            ("postcode", "2"),
        ]);
        assert_eq!(params.street.as_deref(), Some("first"));
        assert_eq!(params.postcode.as_deref(), Some("1"));
        assert!(!params.repeated.any());
    }

    #[test]
    fn housenumber_alias() {
        let alias_only = RawPlaceParams::from_pairs([("housenumber", "10")]);
        assert_eq!(alias_only.house_number.as_deref(), Some("10"));

        let both = RawPlaceParams::from_pairs([("housenumber", "10"), ("house_number", "12")]);
        assert_eq!(both.house_number.as_deref(), Some("12"));
    }

    #[test]
    fn deserializes_from_json_with_alias() {
        let params: RawPlaceParams =
            serde_json::from_str(r#"{"lat":"1","lon":"2","housenumber":"3"}"#).unwrap();
        assert_eq!(params.house_number.as_deref(), Some("3"));
        assert_eq!(params.street, None);
    }
}
