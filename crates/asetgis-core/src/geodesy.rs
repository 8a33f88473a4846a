//! Surface measurement over geographic coordinates.
//!
//! Distance uses the haversine great-circle formula; area uses the
//! Chamberlain–Duquette spherical ring formula. Both assume a sphere of
//! mean Earth radius, which keeps results interchangeable with the
//! measurement output of the previous viewer. Antimeridian-crossing and
//! pole-adjacent rings are not special-cased.

use geo_types::{Coord, MultiPolygon, Rect};

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Great-circle distance in metres between two lon/lat coordinates.
pub fn haversine_distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let d_lat = (b.y - a.y).to_radians();
    let d_lng = (b.x - a.x).to_radians();
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + (d_lng / 2.0).sin().powi(2) * lat_a.cos() * lat_b.cos();
    2.0 * h.sqrt().atan2((1.0 - h).sqrt()) * EARTH_RADIUS_M
}

/// Total length in metres of the open polyline through `points`, in
/// order. No closing segment is added. Fewer than two points measure
/// zero; repeated points contribute zero-length segments.
pub fn path_length(points: &[Coord<f64>]) -> f64 {
    points
        .windows(2)
        .map(|pair| haversine_distance(pair[0], pair[1]))
        .sum()
}

/// Unsigned spherical area in square metres of the ring formed by
/// `points` in order, implicitly closed back to the first point.
///
/// Winding order is not corrected and self-intersecting rings are
/// measured as given. Fewer than three points enclose nothing and
/// measure zero.
pub fn ring_area(points: &[Coord<f64>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let mut total = 0.0;
    for i in 0..points.len() {
        let p1 = points[i];
        let p2 = points[(i + 1) % points.len()];
        total += (p2.x.to_radians() - p1.x.to_radians())
            * (2.0 + p1.y.to_radians().sin() + p2.y.to_radians().sin());
    }

    (total * EARTH_RADIUS_M * EARTH_RADIUS_M / 2.0).abs()
}

/// Format a distance for display: kilometres with two decimals from
/// 1000 m upward, metres with two decimals below.
pub fn format_distance(metres: f64) -> String {
    if metres >= 1000.0 {
        format!("{:.2} km", metres / 1000.0)
    } else {
        format!("{:.2} m", metres)
    }
}

/// Format an area for display: hectares with two decimals from
/// 10 000 m² upward, square metres with two decimals below.
pub fn format_area(sq_metres: f64) -> String {
    if sq_metres >= 10_000.0 {
        format!("{:.2} ha", sq_metres / 10_000.0)
    } else {
        format!("{:.2} m²", sq_metres)
    }
}

/// Lon/lat extent of a multi-polygon, or `None` when it has no
/// coordinates. Used by the view layer to frame a selected parcel.
pub fn bounding_box(geometry: &MultiPolygon<f64>) -> Option<Rect<f64>> {
    let mut min = Coord {
        x: f64::INFINITY,
        y: f64::INFINITY,
    };
    let mut max = Coord {
        x: f64::NEG_INFINITY,
        y: f64::NEG_INFINITY,
    };
    let mut seen = false;

    for polygon in &geometry.0 {
        for c in polygon.exterior().coords() {
            min.x = min.x.min(c.x);
            min.y = min.y.min(c.y);
            max.x = max.x.max(c.x);
            max.y = max.y.max(c.y);
            seen = true;
        }
    }

    seen.then(|| Rect::new(min, max))
}
