//! Error types produced by the ingest crate.
//!
//! Every variant is a request rejection. The `Display` text of each variant is
//! the exact plain-text body returned to the caller, so these strings are part
//! of the public contract and must not be reworded.
//!
//! | Error | Message |
//! |-------|---------|
//! | [`UnparseableCoordinate`](IngestError::UnparseableCoordinate) | `cannot parse lat as finite number` |
//! | [`MissingName`](IngestError::MissingName) | `name parameter is required` |
//! | [`MissingId`](IngestError::MissingId) | `id parameter is required` |
//! | [`MissingHouseNumber`](IngestError::MissingHouseNumber) | `house_number parameter is required for address layer` |
//! | [`HouseNumberNotApplicable`](IngestError::HouseNumberNotApplicable) | `house_number parameter is not applicable for street layer` |
//! | [`MissingStreet`](IngestError::MissingStreet) | `street parameter is required for street layer` |
//! | [`StreetRequiredWithHouseNumber`](IngestError::StreetRequiredWithHouseNumber) | `house_number parameter is required when street is supplied for venue layer` |
//!
//! # HTTP Status Code Mapping
//!
//! ```rust
//! use ingest::{Coordinate, IngestError};
//!
//! let err = IngestError::UnparseableCoordinate(Coordinate::Lon);
//! assert_eq!(err.to_string(), "cannot parse lon as finite number");
//! assert_eq!(err.http_status_code(), 400);
//! ```
use document::{DocumentError, Layer};
use thiserror::Error;

use crate::field::Coordinate;

/// Reasons a synthesis request is rejected before a document is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IngestError {
    /// `lat` or `lon` is blank, non-numeric or non-finite.
    #[error("cannot parse {0} as finite number")]
    UnparseableCoordinate(Coordinate),

    #[error("name parameter is required")]
    MissingName,

    #[error("id parameter is required")]
    MissingId,

    #[error("house_number parameter is required for {0} layer")]
    MissingHouseNumber(Layer),

    #[error("house_number parameter is not applicable for {0} layer")]
    HouseNumberNotApplicable(Layer),

    #[error("street parameter is required for {0} layer")]
    MissingStreet(Layer),

    /// A house number was supplied without a street.
    ///
    /// The wording is kept as published to existing clients.
    #[error("house_number parameter is required when street is supplied for {0} layer")]
    StreetRequiredWithHouseNumber(Layer),

    /// The document model refused a value that passed the field rules.
    #[error(transparent)]
    Document(#[from] DocumentError),
}

impl IngestError {
    /// Every ingest error is a client error.
    pub fn is_client_error(&self) -> bool {
        true
    }

    pub fn http_status_code(&self) -> u16 {
        400
    }
}
