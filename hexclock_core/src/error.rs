//! Error types for the geometry engine.

/// Result type for geometry engine operations
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Error type for geometry engine operations.
///
/// Only configuration mistakes surface as errors; malformed collaborator
/// data (out-of-range completion values, negative durations) is recovered
/// locally and always yields a renderable bundle.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("Unknown category identifier: {0}")]
    UnknownCategory(String),

    #[error("Invalid size: {0}")]
    InvalidSize(String),
}
