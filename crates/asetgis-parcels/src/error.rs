//! Error types for parcel data loading.

use std::io;
use thiserror::Error;

/// Errors raised while loading or decoding the parcel data set.
#[derive(Error, Debug)]
pub enum ParcelError {
    /// The document is not a GeoJSON FeatureCollection.
    #[error("Not a FeatureCollection: found '{0}'")]
    NotAFeatureCollection(String),

    /// A feature carries a geometry type the viewer cannot display.
    #[error("Unsupported geometry '{geometry_type}' in feature {index}")]
    UnsupportedGeometry {
        /// Zero-based position of the feature in the collection.
        index: usize,
        /// The offending GeoJSON geometry type.
        geometry_type: String,
    },

    /// A coordinate position has fewer than two components.
    #[error("Malformed coordinate position in feature {index}")]
    MalformedPosition {
        /// Zero-based position of the feature in the collection.
        index: usize,
    },

    /// I/O error reading the data file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for parcel data operations.
pub type ParcelResult<T> = Result<T, ParcelError>;
