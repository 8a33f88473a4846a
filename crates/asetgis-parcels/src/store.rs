//! The session parcel store: loading, resolution, and search.

use std::path::Path;

use chrono::{DateTime, Local, NaiveDate};

use crate::error::ParcelResult;
use crate::geojson::parse_feature_collection;
use crate::model::Parcel;

/// Search criteria for the parcel list. Both queries are
/// case-insensitive substring matches; an empty query matches
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParcelFilter {
    /// Matched against owner name, former owner name, land id, and
    /// block code.
    pub name_query: String,
    /// Matched against village, district, and regency.
    pub address_query: String,
}

impl ParcelFilter {
    /// Filter on names/identifiers only.
    pub fn by_name(query: impl Into<String>) -> Self {
        Self {
            name_query: query.into(),
            address_query: String::new(),
        }
    }

    /// Filter on the administrative address only.
    pub fn by_address(query: impl Into<String>) -> Self {
        Self {
            name_query: String::new(),
            address_query: query.into(),
        }
    }
}

/// The full parcel record set for one session.
///
/// Loaded once at startup and treated as immutable afterwards; every
/// lookup borrows from the store.
#[derive(Debug, Clone, Default)]
pub struct ParcelStore {
    parcels: Vec<Parcel>,
    last_updated: Option<NaiveDate>,
}

impl ParcelStore {
    /// Build a store from already-decoded records.
    pub fn new(parcels: Vec<Parcel>) -> Self {
        Self {
            parcels,
            last_updated: None,
        }
    }

    /// Decode a GeoJSON FeatureCollection document into a store.
    pub fn from_geojson_str(document: &str) -> ParcelResult<Self> {
        Ok(Self::new(parse_feature_collection(document)?))
    }

    /// Load the parcel export from disk. The file's modification time
    /// becomes the data-set revision date shown in the sidebar footer.
    pub fn load_from_file(path: &Path) -> ParcelResult<Self> {
        let document = std::fs::read_to_string(path)?;
        let mut store = Self::from_geojson_str(&document)?;

        if let Ok(modified) = std::fs::metadata(path).and_then(|m| m.modified()) {
            let stamp: DateTime<Local> = modified.into();
            store.last_updated = Some(stamp.date_naive());
        }

        tracing::info!(
            path = %path.display(),
            count = store.len(),
            "loaded parcel data set"
        );
        Ok(store)
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.parcels.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }

    /// All records, in load order.
    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// Revision date of the data set, when known.
    pub fn last_updated(&self) -> Option<NaiveDate> {
        self.last_updated
    }

    /// Override the revision date (used when the caller knows it from a
    /// source other than the file system).
    pub fn set_last_updated(&mut self, date: Option<NaiveDate>) {
        self.last_updated = date;
    }

    /// Resolve the single best record for an identifier pair.
    ///
    /// The record set contains duplicated identifiers from merged
    /// imports, so a plain lookup can land on a half-empty duplicate.
    /// Selection works in two passes: the block code is matched first,
    /// and only when it yields nothing is the land id tried. The order
    /// looks inverted against the field names but matches the upstream
    /// system deliberately; do not swap it.
    ///
    /// Among duplicates, the record with the highest completeness score
    /// wins; ties keep the earliest record in load order. Returns
    /// `None` when nothing matches — the caller falls back to whatever
    /// record it already has.
    pub fn find_best(&self, land_id: Option<&str>, block_code: Option<&str>) -> Option<&Parcel> {
        if self.parcels.is_empty() {
            return None;
        }

        let mut candidates: Vec<&Parcel> = Vec::new();

        if let Some(code) = block_code.filter(|c| !c.is_empty()) {
            candidates = self
                .parcels
                .iter()
                .filter(|p| p.attributes.block_code == code)
                .collect();
        }

        if candidates.is_empty() {
            if let Some(id) = land_id.filter(|i| !i.is_empty()) {
                candidates = self
                    .parcels
                    .iter()
                    .filter(|p| p.attributes.land_id == id)
                    .collect();
            }
        }

        if candidates.is_empty() {
            return None;
        }
        if candidates.len() > 1 {
            tracing::debug!(
                count = candidates.len(),
                land_id = land_id.unwrap_or(""),
                block_code = block_code.unwrap_or(""),
                "duplicate records, ranking by completeness"
            );
        }

        // Stable left fold: only a strictly greater score replaces the
        // current best, so equal scores keep the earliest record.
        let mut best = candidates[0];
        for candidate in &candidates[1..] {
            if candidate.completeness_score() > best.completeness_score() {
                best = candidate;
            }
        }
        Some(best)
    }

    /// Parcels matching `filter`, in load order. Only parcels with an
    /// owner name are listed.
    pub fn search(&self, filter: &ParcelFilter) -> Vec<&Parcel> {
        let name_query = filter.name_query.to_lowercase();
        let address_query = filter.address_query.to_lowercase();

        self.parcels
            .iter()
            .filter(|p| {
                let a = &p.attributes;
                let match_name = name_query.is_empty()
                    || [
                        a.owner_name.as_deref(),
                        a.former_owner.as_deref(),
                        Some(a.land_id.as_str()),
                        Some(a.block_code.as_str()),
                    ]
                    .iter()
                    .any(|v| v.unwrap_or("").to_lowercase().contains(&name_query));

                let match_address = address_query.is_empty()
                    || [
                        a.village.as_deref(),
                        a.district.as_deref(),
                        a.regency.as_deref(),
                    ]
                    .iter()
                    .any(|v| v.unwrap_or("").to_lowercase().contains(&address_query));

                match_name && match_address && a.has_owner()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParcelAttributes;
    use asetgis_core::MultiPolygon;

    fn parcel(block_code: &str, land_id: &str) -> Parcel {
        Parcel {
            attributes: ParcelAttributes {
                block_code: block_code.to_string(),
                land_id: land_id.to_string(),
                ..Default::default()
            },
            geometry: MultiPolygon(vec![]),
        }
    }

    fn with_owner(mut p: Parcel, owner: &str) -> Parcel {
        p.attributes.owner_name = Some(owner.to_string());
        p
    }

    #[test]
    fn test_find_best_empty_store() {
        let store = ParcelStore::default();
        assert!(store.find_best(Some("T-1"), Some("BD-1")).is_none());
    }

    #[test]
    fn test_find_best_no_identifiers() {
        let store = ParcelStore::new(vec![parcel("BD-1", "T-1")]);
        assert!(store.find_best(None, None).is_none());
        assert!(store.find_best(Some(""), Some("")).is_none());
    }

    #[test]
    fn test_find_best_block_code_wins_over_land_id() {
        let store = ParcelStore::new(vec![parcel("BD-1", "T-1"), parcel("BD-2", "T-2")]);
        // Both identifiers would match a record; the block code decides.
        let hit = store.find_best(Some("T-1"), Some("BD-2")).unwrap();
        assert_eq!(hit.attributes.land_id, "T-2");
    }

    #[test]
    fn test_find_best_falls_back_to_land_id() {
        let store = ParcelStore::new(vec![parcel("BD-1", "T-1")]);
        let hit = store.find_best(Some("T-1"), Some("BD-404")).unwrap();
        assert_eq!(hit.attributes.block_code, "BD-1");
    }

    #[test]
    fn test_find_best_prefers_complete_duplicate() {
        let bare = parcel("BD-1", "T-1");
        let mut rich = parcel("BD-1", "T-1");
        rich.attributes.former_owner = Some("Budi".to_string());

        // Regardless of input order, the record with lineage data wins.
        let store = ParcelStore::new(vec![bare.clone(), rich.clone()]);
        let hit = store.find_best(None, Some("BD-1")).unwrap();
        assert_eq!(hit.attributes.former_owner.as_deref(), Some("Budi"));

        let store = ParcelStore::new(vec![rich, bare]);
        let hit = store.find_best(None, Some("BD-1")).unwrap();
        assert_eq!(hit.attributes.former_owner.as_deref(), Some("Budi"));
    }

    #[test]
    fn test_find_best_tie_keeps_earliest() {
        let mut first = parcel("BD-1", "T-1");
        first.attributes.remark = Some("first".to_string());
        let mut second = parcel("BD-1", "T-2");
        second.attributes.remark = Some("second".to_string());

        // Identical (zero) completeness: input order decides.
        let store = ParcelStore::new(vec![first, second]);
        let hit = store.find_best(None, Some("BD-1")).unwrap();
        assert_eq!(hit.attributes.remark.as_deref(), Some("first"));
    }

    #[test]
    fn test_search_name_and_address() {
        let mut a = with_owner(parcel("BD-1", "T-1"), "PT Suparma");
        a.attributes.village = Some("Karangpilang".to_string());
        let b = with_owner(parcel("BD-2", "T-2"), "Budi Santoso");
        let store = ParcelStore::new(vec![a, b]);

        let hits = store.search(&ParcelFilter::by_name("suparma"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].attributes.block_code, "BD-1");

        let hits = store.search(&ParcelFilter::by_address("karang"));
        assert_eq!(hits.len(), 1);

        let hits = store.search(&ParcelFilter {
            name_query: "budi".to_string(),
            address_query: "karang".to_string(),
        });
        assert!(hits.is_empty());
    }

    #[test]
    fn test_search_lists_only_owned_parcels() {
        let store = ParcelStore::new(vec![
            parcel("BD-1", "T-1"),
            with_owner(parcel("BD-2", "T-2"), "PT Suparma"),
        ]);
        let hits = store.search(&ParcelFilter::default());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].attributes.block_code, "BD-2");
    }

    #[test]
    fn test_load_from_file_stamps_revision_date() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.geojson");
        std::fs::write(
            &path,
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "properties": { "KODEBD": "BD-1", "IDTANAH": "T-1" },
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[
                            [112.6, -7.3], [112.61, -7.3],
                            [112.61, -7.29], [112.6, -7.3]
                        ]]
                    }
                }]
            }"#,
        )
        .unwrap();

        let store = ParcelStore::load_from_file(&path).unwrap();
        assert_eq!(store.len(), 1);
        // A freshly written file carries a recent modification date.
        let stamp = store.last_updated().unwrap();
        assert!(stamp <= Local::now().date_naive());
        assert!(Local::now().date_naive() - stamp <= chrono::Duration::days(1));
    }

    #[test]
    fn test_load_from_file_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = ParcelStore::load_from_file(&dir.path().join("nope.geojson"));
        assert!(matches!(err, Err(crate::ParcelError::Io(_))));
    }

    #[test]
    fn test_search_matches_identifiers() {
        let store = ParcelStore::new(vec![with_owner(parcel("BD-9", "T-9"), "X")]);
        assert_eq!(store.search(&ParcelFilter::by_name("bd-9")).len(), 1);
        assert_eq!(store.search(&ParcelFilter::by_name("t-9")).len(), 1);
        assert_eq!(store.search(&ParcelFilter::by_name("zzz")).len(), 0);
    }
}
