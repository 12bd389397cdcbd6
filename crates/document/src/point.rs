use serde::Serialize;

use crate::error::DocumentError;

/// A finite latitude/longitude pair.
///
/// The only way to build one is [`CenterPoint::new`], so holding a
/// `CenterPoint` means both coordinates are finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CenterPoint {
    lat: f64,
    lon: f64,
}

impl CenterPoint {
    pub fn new(lat: f64, lon: f64) -> Result<Self, DocumentError> {
        if !lat.is_finite() {
            return Err(DocumentError::NonFiniteCoordinate { axis: "lat" });
        }
        if !lon.is_finite() {
            return Err(DocumentError::NonFiniteCoordinate { axis: "lon" });
        }
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}
