//! Parcel record model.
//!
//! Field names follow the upstream GeoJSON export schema (uppercase
//! Indonesian cadastral keys) on the wire and idiomatic names in code.
//! Records are immutable for the lifetime of a session.

use asetgis_core::MultiPolygon;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Attribute block of one land parcel, as exported by the upstream
/// database. Optional text fields arrive as `null` or empty strings
/// interchangeably; both count as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParcelAttributes {
    /// Upstream row id.
    #[serde(rename = "Id")]
    pub id: Option<i64>,
    /// Block code. Coarse identifier, shared by records that were merged
    /// from several imports.
    #[serde(rename = "KODEBD")]
    pub block_code: String,
    /// Land id. Finer identifier, used as the fallback match key.
    #[serde(rename = "IDTANAH")]
    pub land_id: String,
    /// Current owner name.
    #[serde(rename = "NAMAMIL")]
    pub owner_name: Option<String>,
    /// Former owner name (acquisition lineage).
    #[serde(rename = "NAMAEKS")]
    pub former_owner: Option<String>,
    /// Tenure / right type.
    #[serde(rename = "JENISHAK")]
    pub tenure_type: Option<String>,
    /// Village (desa/kelurahan).
    #[serde(rename = "DESAKEL")]
    pub village: Option<String>,
    /// District (kecamatan).
    #[serde(rename = "KECAMTN")]
    pub district: Option<String>,
    /// Regency or city (kabupaten/kota).
    #[serde(rename = "KABKOTA")]
    pub regency: Option<String>,
    /// Province.
    #[serde(rename = "PROVINS")]
    pub province: Option<String>,
    /// Ownership document file reference.
    #[serde(rename = "BERKDOK")]
    pub document_file: Option<String>,
    /// Survey drawing file reference.
    #[serde(rename = "BERKGBR")]
    pub drawing_file: Option<String>,
    /// Tax document file reference.
    #[serde(rename = "BERKPJK")]
    pub tax_file: Option<String>,
    /// Free-form acquisition history.
    #[serde(rename = "HISTORI")]
    pub history: Option<String>,
    /// Price per square metre, rupiah.
    #[serde(rename = "HARGAMT")]
    pub price_per_metre: Option<f64>,
    /// Price for the whole parcel, rupiah.
    #[serde(rename = "HARGABL")]
    pub price_total: Option<f64>,
    /// Remarks.
    #[serde(rename = "REMARK")]
    pub remark: Option<String>,
    /// Area according to the ownership document, m².
    #[serde(rename = "LUASDOK")]
    pub document_area: Option<f64>,
    /// Area measured from the GIS geometry, m².
    #[serde(rename = "LUASGIS")]
    pub surveyed_area: Option<f64>,
}

impl ParcelAttributes {
    /// Completeness score used to rank duplicate records. Former-owner
    /// lineage is the rarest attribute and weighs highest, then the
    /// owner name, then a non-zero surveyed area.
    pub fn completeness_score(&self) -> u32 {
        let mut score = 0;
        if has_text(&self.former_owner) {
            score += 4;
        }
        if has_text(&self.owner_name) {
            score += 2;
        }
        if self.surveyed_area.is_some_and(|a| a != 0.0) {
            score += 1;
        }
        score
    }

    /// Whether the parcel carries an owner name. Only owned parcels are
    /// listed in the sidebar.
    pub fn has_owner(&self) -> bool {
        has_text(&self.owner_name)
    }

    /// Administrative address line: the non-empty fields from village up
    /// to province, comma-joined.
    pub fn full_address(&self) -> String {
        [
            self.village.as_deref(),
            self.district.as_deref(),
            self.regency.as_deref(),
            self.province.as_deref(),
        ]
        .iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// One land parcel: attributes plus its surveyed geometry in geographic
/// coordinates. Geometry is read-only for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Parcel {
    /// The upstream attribute block.
    pub attributes: ParcelAttributes,
    /// Parcel outline(s), lon/lat.
    pub geometry: MultiPolygon<f64>,
}

impl Parcel {
    /// Completeness score of this record; see
    /// [`ParcelAttributes::completeness_score`].
    pub fn completeness_score(&self) -> u32 {
        self.attributes.completeness_score()
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

/// Format a document/GIS area for the detail panel: id-ID digit
/// grouping, up to two decimals, `" m²"` suffix. Absent or zero values
/// render as `"-"`.
pub fn format_document_area(area: Option<f64>) -> String {
    match area {
        Some(a) if a != 0.0 => format!("{} m²", group_digits_id(a, 2)),
        _ => "-".to_string(),
    }
}

/// Format a rupiah amount for the detail panel: `"Rp "` prefix with
/// id-ID digit grouping. Absent or zero values render as `"-"`.
pub fn format_currency(amount: Option<f64>) -> String {
    match amount {
        Some(a) if a != 0.0 => format!("Rp {}", group_digits_id(a, 0)),
        _ => "-".to_string(),
    }
}

/// Format the data-set revision date the way the sidebar footer shows
/// it: day, Indonesian month name, year.
pub fn format_updated_date(date: NaiveDate) -> String {
    const MONTHS: [&str; 12] = [
        "Januari",
        "Februari",
        "Maret",
        "April",
        "Mei",
        "Juni",
        "Juli",
        "Agustus",
        "September",
        "Oktober",
        "November",
        "Desember",
    ];
    format!(
        "{} {} {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// id-ID number formatting: '.' thousands separator, ',' decimal
/// separator, trailing fraction zeros trimmed.
fn group_digits_id(value: f64, max_decimals: usize) -> String {
    let formatted = format!("{:.*}", max_decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (formatted.as_str(), ""),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped},{frac_part}")
    }
}
