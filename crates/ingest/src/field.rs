//! Field-level helpers: the trimming policy and coordinate parsing.
//!
//! A value that is absent, empty, or only whitespace is *blank*. Everything
//! stored downstream is trimmed.

use std::fmt;

use crate::error::IngestError;

/// Which coordinate a parse failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinate {
    Lat,
    Lon,
}

impl Coordinate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Coordinate::Lat => "lat",
            Coordinate::Lon => "lon",
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the trimmed value, or `None` when it is blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Owned variant of [`non_blank`].
pub(crate) fn non_blank_owned(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == raw.len() {
            Some(raw)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parses a coordinate as a finite decimal number.
///
/// Blank input, anything `f64` cannot parse, and `NaN`/`inf` spellings all
/// fail with [`IngestError::UnparseableCoordinate`].
pub fn parse_finite(coord: Coordinate, value: Option<&str>) -> Result<f64, IngestError> {
    non_blank(value)
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .ok_or(IngestError::UnparseableCoordinate(coord))
}
