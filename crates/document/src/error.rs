use thiserror::Error;

/// Errors raised while constructing or serializing a place document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("unknown layer: {0}")]
    UnknownLayer(String),
    #[error("{axis} must be a finite number")]
    NonFiniteCoordinate { axis: &'static str },
    #[error("failed to serialize document: {0}")]
    Serialize(String),
}
