use document::{AddressField, PlaceDocument};
use ingest::ValidatedPlace;

/// Language slot used for the request's single `name` value.
pub const DEFAULT_LANG: &str = "default";

/// Build a document from validated fields.
///
/// Cannot fail: every field has already been trimmed and checked, and the
/// centroid is finite by construction.
pub fn generate(place: ValidatedPlace) -> PlaceDocument {
    let ValidatedPlace {
        source,
        layer,
        source_id,
        name,
        center_point,
        house_number,
        street,
        postcode,
    } = place;

    let mut doc = PlaceDocument::new(source, layer, source_id, center_point);
    doc.set_name(DEFAULT_LANG, name);

    let parts = [
        (AddressField::Number, house_number),
        (AddressField::Street, street),
        (AddressField::Zip, postcode),
    ];
    for (field, value) in parts {
        if let Some(value) = value {
            doc.set_address(field, value);
        }
    }

    doc
}
