//! GeoJSON decoding for the upstream parcel export.
//!
//! The export is a FeatureCollection of Polygon/MultiPolygon features.
//! Decoding is plain serde over the document structure; Polygon
//! geometries are widened to MultiPolygon so the rest of the system
//! deals with a single geometry type. Positions may carry an altitude
//! component, which is discarded.

use asetgis_core::{Coord, LineString, MultiPolygon, Polygon};
use serde::Deserialize;

use crate::error::{ParcelError, ParcelResult};
use crate::model::{Parcel, ParcelAttributes};

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: ParcelAttributes,
    geometry: Geometry,
}

/// Raw GeoJSON positions: rings of `[lng, lat, ...]` arrays.
type RawRing = Vec<Vec<f64>>;

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon { coordinates: Vec<RawRing> },
    MultiPolygon { coordinates: Vec<Vec<RawRing>> },
    #[serde(other)]
    Unsupported,
}

/// Decode a GeoJSON FeatureCollection document into parcel records.
pub fn parse_feature_collection(document: &str) -> ParcelResult<Vec<Parcel>> {
    let collection: FeatureCollection = serde_json::from_str(document)?;
    if collection.kind != "FeatureCollection" {
        return Err(ParcelError::NotAFeatureCollection(collection.kind));
    }

    let mut parcels = Vec::with_capacity(collection.features.len());
    for (index, feature) in collection.features.into_iter().enumerate() {
        let geometry = match feature.geometry {
            Geometry::Polygon { coordinates } => {
                MultiPolygon(vec![build_polygon(coordinates, index)?])
            }
            Geometry::MultiPolygon { coordinates } => {
                let polygons = coordinates
                    .into_iter()
                    .map(|rings| build_polygon(rings, index))
                    .collect::<ParcelResult<Vec<_>>>()?;
                MultiPolygon(polygons)
            }
            Geometry::Unsupported => {
                return Err(ParcelError::UnsupportedGeometry {
                    index,
                    geometry_type: "non-polygon".to_string(),
                });
            }
        };

        parcels.push(Parcel {
            attributes: feature.properties,
            geometry,
        });
    }

    tracing::debug!(count = parcels.len(), "decoded parcel features");
    Ok(parcels)
}

fn build_polygon(rings: Vec<RawRing>, index: usize) -> ParcelResult<Polygon<f64>> {
    let mut lines = rings
        .into_iter()
        .map(|ring| build_ring(ring, index))
        .collect::<ParcelResult<Vec<_>>>()?;

    if lines.is_empty() {
        // An empty coordinates array is tolerated as an empty outline.
        return Ok(Polygon::new(LineString(vec![]), vec![]));
    }
    let exterior = lines.remove(0);
    Ok(Polygon::new(exterior, lines))
}

fn build_ring(ring: RawRing, index: usize) -> ParcelResult<LineString<f64>> {
    let coords = ring
        .into_iter()
        .map(|position| {
            if position.len() < 2 {
                return Err(ParcelError::MalformedPosition { index });
            }
            Ok(Coord {
                x: position[0],
                y: position[1],
            })
        })
        .collect::<ParcelResult<Vec<_>>>()?;
    Ok(LineString(coords))
}
