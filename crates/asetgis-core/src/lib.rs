//! # Asetgis Core
//!
//! Geographic primitives shared by the Asetgis crates.
//! Provides great-circle distance, spherical ring area, extent
//! computation, and the display formatting used by the measurement
//! tools.
//!
//! Coordinates follow the GeoJSON convention throughout: `x` is
//! longitude and `y` is latitude, both in decimal degrees (WGS84).

pub mod geodesy;

pub use geodesy::{
    bounding_box, format_area, format_distance, haversine_distance, path_length, ring_area,
    EARTH_RADIUS_M,
};

// The ecosystem geometry vocabulary, re-exported so downstream crates
// agree on one set of types.
pub use geo_types::{Coord, LineString, MultiPolygon, Point, Polygon, Rect};

/// Convenience constructor for a lon/lat coordinate.
pub fn coord(lng: f64, lat: f64) -> Coord<f64> {
    Coord { x: lng, y: lat }
}
