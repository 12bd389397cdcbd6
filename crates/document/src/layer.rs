//! Document layers accepted by the synthesis endpoint.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DocumentError;

/// The kind of place a document describes.
///
/// Only these three layers are routable; any other path segment is a routing
/// mismatch and never reaches validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Venue,
    Address,
    Street,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Venue, Layer::Address, Layer::Street];

    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Venue => "venue",
            Layer::Address => "address",
            Layer::Street => "street",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layer::ALL
            .into_iter()
            .find(|layer| layer.as_str() == s)
            .ok_or_else(|| DocumentError::UnknownLayer(s.to_string()))
    }
}
