//! # Asetgis Parcels
//!
//! The land-parcel data layer:
//! - serde-backed decoding of the upstream cadastral GeoJSON export
//! - an immutable in-memory [`ParcelStore`] loaded once per session
//! - duplicate-record resolution ([`ParcelStore::find_best`])
//! - owner/address search over the record set
//! - display helpers for the detail panel (areas, prices, addresses)
//!
//! The record set comes from merged imports and is known to contain
//! duplicate identifiers with varying attribute completeness; the
//! resolver exists to pick one deterministic winner for the UI.

pub mod error;
pub mod geojson;
pub mod model;
pub mod store;

pub use error::{ParcelError, ParcelResult};
pub use geojson::parse_feature_collection;
pub use model::{format_currency, format_document_area, format_updated_date, Parcel, ParcelAttributes};
pub use store::{ParcelFilter, ParcelStore};
