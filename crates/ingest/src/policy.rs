//! Per-layer validation policy.
//!
//! Each [`Layer`] has a fixed [`LayerPolicy`] describing how `house_number`
//! and `street` are treated. The house-number rule is always checked before
//! the street rule.
//!
//! | Layer | house_number | street |
//! |-------|--------------|--------|
//! | address | required | required |
//! | street | forbidden | required |
//! | venue | optional | required when house_number is present |
//!
//! ```rust
//! use document::Layer;
//! use ingest::{HouseNumberRule, LayerPolicy, StreetRule};
//!
//! let policy = LayerPolicy::for_layer(Layer::Street);
//! assert_eq!(policy.house_number, HouseNumberRule::Forbidden);
//! assert_eq!(policy.street, StreetRule::Required);
//! ```

use document::Layer;

use crate::error::IngestError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HouseNumberRule {
    Required,
    Forbidden,
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreetRule {
    Required,
    /// Street must be present whenever a house number is.
    RequiredWithHouseNumber,
}

/// Layer-specific rules for the address fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerPolicy {
    pub layer: Layer,
    pub house_number: HouseNumberRule,
    pub street: StreetRule,
}

impl LayerPolicy {
    pub fn for_layer(layer: Layer) -> Self {
        let (house_number, street) = match layer {
            Layer::Address => (HouseNumberRule::Required, StreetRule::Required),
            Layer::Street => (HouseNumberRule::Forbidden, StreetRule::Required),
            Layer::Venue => (HouseNumberRule::Optional, StreetRule::RequiredWithHouseNumber),
        };
        Self {
            layer,
            house_number,
            street,
        }
    }

    /// Checks already-trimmed address fields against this policy.
    pub fn check(
        &self,
        house_number: Option<&str>,
        street: Option<&str>,
    ) -> Result<(), IngestError> {
        match (self.house_number, house_number) {
            (HouseNumberRule::Required, None) => {
                return Err(IngestError::MissingHouseNumber(self.layer));
            }
            (HouseNumberRule::Forbidden, Some(_)) => {
                return Err(IngestError::HouseNumberNotApplicable(self.layer));
            }
            _ => {}
        }

        match (self.street, street) {
            (StreetRule::Required, None) => Err(IngestError::MissingStreet(self.layer)),
            (StreetRule::RequiredWithHouseNumber, None) if house_number.is_some() => {
                Err(IngestError::StreetRequiredWithHouseNumber(self.layer))
            }
            _ => Ok(()),
        }
    }
}
