//! Place document ingest layer.
//!
//! This is where request parameters enter the synthesis pipeline. We take the
//! raw query values for one layer, run them through a fixed rule chain, and
//! hand back trimmed fields the document builder can use without further
//! checks.
//!
//! ## Rule order
//!
//! 1. `lat`, then `lon`: non-blank and a finite decimal number
//! 2. `name`: non-blank
//! 3. `id`: non-blank
//! 4. layer policy ([`LayerPolicy`]): `house_number` rule, then `street` rule
//!
//! The first failing rule wins; there is no multi-error reporting. A
//! required key sent more than once fails its rule as if it were blank.
//!
//! ## Example
//!
//! ```
//! use document::Layer;
//! use ingest::{validate, RawPlaceParams};
//!
//! let params = RawPlaceParams::from_pairs([
//!     ("id", " id value "),
//!     ("name", "name value"),
//!     ("lat", "12.121212"),
//!     ("lon", "21.212121"),
//!     ("street", "street value"),
//! ]);
//!
//! let place = validate("datasource", Layer::Street, params).unwrap();
//! assert_eq!(place.source_id, "id value");
//! assert_eq!(place.center_point.lat(), 12.121212);
//! ```
use std::time::Instant;

use document::{CenterPoint, Layer};
use tracing::{info, warn};

mod error;
mod field;
mod policy;
mod types;

pub use crate::error::IngestError;
pub use crate::field::{non_blank, parse_finite, Coordinate};
pub use crate::policy::{HouseNumberRule, LayerPolicy, StreetRule};
pub use crate::types::{RawPlaceParams, RepeatedKeys, ValidatedPlace};

use crate::field::non_blank_owned;

/// Validate raw parameters for `layer` and normalize them.
pub fn validate(
    source: impl Into<String>,
    layer: Layer,
    params: RawPlaceParams,
) -> Result<ValidatedPlace, IngestError> {
    let start = Instant::now();
    let source = source.into();

    match validate_inner(source, layer, params) {
        Ok(place) => {
            info!(
                source = %place.source,
                layer = %layer,
                source_id = %place.source_id,
                elapsed_micros = start.elapsed().as_micros(),
                "validate_success"
            );
            Ok(place)
        }
        Err(err) => {
            warn!(
                layer = %layer,
                error = %err,
                elapsed_micros = start.elapsed().as_micros(),
                "validate_failure"
            );
            Err(err)
        }
    }
}

fn validate_inner(
    source: String,
    layer: Layer,
    params: RawPlaceParams,
) -> Result<ValidatedPlace, IngestError> {
    let RawPlaceParams {
        lat,
        lon,
        name,
        id,
        house_number,
        street,
        postcode,
        repeated,
    } = params;

    let lat = parse_finite(Coordinate::Lat, single(lat, repeated.lat).as_deref())?;
    let lon = parse_finite(Coordinate::Lon, single(lon, repeated.lon).as_deref())?;
    let center_point = CenterPoint::new(lat, lon)?;

    let name = non_blank_owned(single(name, repeated.name)).ok_or(IngestError::MissingName)?;
    let source_id = non_blank_owned(single(id, repeated.id)).ok_or(IngestError::MissingId)?;

    let house_number = non_blank_owned(house_number);
    let street = non_blank_owned(street);
    LayerPolicy::for_layer(layer).check(house_number.as_deref(), street.as_deref())?;

    Ok(ValidatedPlace {
        source,
        layer,
        source_id,
        name,
        center_point,
        house_number,
        street,
        postcode: non_blank_owned(postcode),
    })
}

/// A repeated key has no single value.
fn single(value: Option<String>, repeated: bool) -> Option<String> {
    if repeated {
        None
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> RawPlaceParams {
        RawPlaceParams::from_pairs(pairs.iter().copied())
    }

    fn base(extra: &[(&'static str, &'static str)]) -> RawPlaceParams {
        let mut pairs = vec![
            ("id", "id value"),
            ("name", "name value"),
            ("lat", "12.121212"),
            ("lon", "21.212121"),
        ];
        pairs.extend_from_slice(extra);
        params(&pairs)
    }

    #[test]
    fn bad_lat_rejected_on_every_layer() {
        for layer in Layer::ALL {
            for bad in ["a", "NaN", "Infinity", "{}", "false", "null", " ", ""] {
                let mut p = base(&[("house_number", "1"), ("street", "s")]);
                p.lat = Some(bad.to_string());
                p.lon = Some("not a number either".to_string());
                let err = validate("src", layer, p).unwrap_err();
                assert_eq!(err.to_string(), "cannot parse lat as finite number");
            }

            let mut absent = base(&[]);
            absent.lat = None;
            assert_eq!(
                validate("src", layer, absent),
                Err(IngestError::UnparseableCoordinate(Coordinate::Lat))
            );
        }
    }

    #[test]
    fn bad_lon_rejected_on_every_layer() {
        for layer in Layer::ALL {
            for bad in [Some("a"), Some("-Infinity"), Some(" "), None] {
                let mut p = base(&[]);
                p.lon = bad.map(str::to_string);
                let err = validate("src", layer, p).unwrap_err();
                assert_eq!(err.to_string(), "cannot parse lon as finite number");
            }
        }
    }

    #[test]
    fn blank_name_then_id() {
        for layer in Layer::ALL {
            for blank in [None, Some(""), Some("   ")] {
                let mut p = base(&[]);
                p.name = blank.map(str::to_string);
                p.id = None;
                assert_eq!(validate("src", layer, p), Err(IngestError::MissingName));

                let mut p = base(&[]);
                p.id = blank.map(str::to_string);
                assert_eq!(validate("src", layer, p), Err(IngestError::MissingId));
            }
        }
    }

    #[test]
    fn address_layer_rules() {
        let err = validate("src", Layer::Address, base(&[("street", "s")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "house_number parameter is required for address layer"
        );

        let err = validate("src", Layer::Address, base(&[("house_number", "1")])).unwrap_err();
        assert_eq!(err.to_string(), "street parameter is required for address layer");
    }

    #[test]
    fn street_layer_rules() {
        let err = validate(
            "src",
            Layer::Street,
            base(&[("house_number", "1"), ("street", "s")]),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "house_number parameter is not applicable for street layer"
        );

        let err = validate("src", Layer::Street, base(&[("house_number", "  ")])).unwrap_err();
        assert_eq!(err.to_string(), "street parameter is required for street layer");
    }

    #[test]
    fn venue_layer_rules() {
        let err = validate(
            "src",
            Layer::Venue,
            base(&[("house_number", "1"), ("street", " ")]),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "house_number parameter is required when street is supplied for venue layer"
        );

        assert!(validate("src", Layer::Venue, base(&[])).is_ok());
        assert!(validate(
            "src",
            Layer::Venue,
            base(&[("house_number", "1"), ("street", "s")])
        )
        .is_ok());
    }

    #[test]
    fn values_are_trimmed_and_blanks_dropped() {
        let p = params(&[
            ("id", " id value "),
            ("name", " name value "),
            ("lat", " 12.121212 "),
            ("lon", "21.212121"),
            ("house_number", " house_number value "),
            ("street", " street value "),
            ("postcode", "   "),
        ]);

        let place = validate("datasource", Layer::Venue, p).unwrap();
        assert_eq!(place.source, "datasource");
        assert_eq!(place.source_id, "id value");
        assert_eq!(place.name, "name value");
        assert_eq!(place.house_number.as_deref(), Some("house_number value"));
        assert_eq!(place.street.as_deref(), Some("street value"));
        assert_eq!(place.postcode, None);
        assert_eq!(place.center_point, CenterPoint::new(12.121212, 21.212121).unwrap());
    }

    #[test]
    fn repeated_required_keys_rejected_like_missing() {
        let cases: [(&[(&str, &str)], IngestError); 4] = [
            (
                &[("lat", "1"), ("lat", "2")],
                IngestError::UnparseableCoordinate(Coordinate::Lat),
            ),
            (
                &[("lon", "3"), ("lon", "3")],
                IngestError::UnparseableCoordinate(Coordinate::Lon),
            ),
            (&[("name", "a"), ("name", "b")], IngestError::MissingName),
            (&[("id", "1"), ("id", "2")], IngestError::MissingId),
        ];

        for (repeated, expected) in cases {
            let mut pairs = vec![("id", "1"), ("name", "n"), ("lat", "1"), ("lon", "3")];
            pairs.retain(|(key, _)| !repeated.iter().any(|(k, _)| k == key));
            pairs.extend_from_slice(repeated);

            for layer in Layer::ALL {
                let extra = [("house_number", "1"), ("street", "s")];
                let mut all = pairs.clone();
                if layer != Layer::Street {
                    all.extend_from_slice(&extra);
                } else {
                    all.push(("street", "s"));
                }
                assert_eq!(
                    validate("src", layer, params(&all)),
                    Err(expected.clone()),
                    "{repeated:?} on {layer}"
                );
            }
        }
    }

    #[test]
    fn repeated_lat_still_checked_before_name() {
        let p = params(&[("lat", "1"), ("lat", "2"), ("lon", "3")]);
        assert_eq!(
            validate("src", Layer::Venue, p),
            Err(IngestError::UnparseableCoordinate(Coordinate::Lat))
        );
    }

    #[test]
    fn repeated_address_key_keeps_first_value() {
        let p = base(&[("street", "first"), ("street", "second"), ("house_number", "1")]);
        let place = validate("src", Layer::Venue, p).unwrap();
        assert_eq!(place.street.as_deref(), Some("first"));
    }
}
