//! # Asetgis
//!
//! Core of a cadastral (land-parcel) map viewer: the data layer,
//! duplicate-record resolution, and the interactive measurement engine,
//! kept strictly free of rendering concerns so a map front end can
//! drive them through plain method calls.
//!
//! ## Architecture
//!
//! The workspace is organized as focused crates:
//!
//! 1. **asetgis-core** - geographic primitives: great-circle distance,
//!    spherical ring area, extents, display formatting
//! 2. **asetgis-parcels** - parcel records, GeoJSON loading, the
//!    duplicate-record resolver, owner/address search
//! 3. **asetgis-measure** - the click-driven distance/area measurement
//!    state machine
//! 4. **asetgis-settings** - viewer configuration and persistence
//! 5. **asetgis** - this crate: public surface plus a small inspection
//!    binary
//!
//! The record set is loaded once per session and treated as immutable;
//! both the resolver and the measurement engine are synchronous and
//! single-threaded, driven by discrete UI events.

pub use asetgis_core::{
    bounding_box, coord, format_area, format_distance, haversine_distance, path_length, ring_area,
    Coord, LineString, MultiPolygon, Point, Polygon, Rect, EARTH_RADIUS_M,
};

pub use asetgis_measure::{MeasureMode, MeasureTool};

pub use asetgis_parcels::{
    format_currency, format_document_area, format_updated_date, Parcel, ParcelAttributes,
    ParcelError, ParcelFilter, ParcelStore,
};

pub use asetgis_settings::{
    Basemap, DataSettings, MapSettings, PolygonStyle, SettingsError, ViewerConfig,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output, honoring the
/// RUST_LOG environment variable.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
