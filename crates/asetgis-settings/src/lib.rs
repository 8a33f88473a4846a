//! # Asetgis Settings
//!
//! Viewer configuration: basemap choice, polygon styling, the startup
//! map view, and the data file location. Persisted as JSON or TOML in
//! the platform config directory.

pub mod config;
pub mod error;

pub use config::{Basemap, DataSettings, MapSettings, PolygonStyle, ViewerConfig};
pub use error::{SettingsError, SettingsResult};
