//! Viewer configuration.
//!
//! Mirrors the knobs the sidebar exposes: basemap, polygon styling, the
//! startup view, and where the parcel export lives. Files are JSON or
//! TOML, switched on the extension, and live in the platform config
//! directory by default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{SettingsError, SettingsResult};

/// Basemap selection. Tile URLs and attributions are static data for
/// the renderer; nothing here talks to a tile server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Basemap {
    /// OpenStreetMap standard tiles.
    Osm,
    /// Esri world imagery.
    Satellite,
    /// Esri street map.
    Streets,
    /// Esri topographic map.
    Topo,
    /// Esri dark gray canvas.
    Dark,
}

impl Basemap {
    /// All selectable basemaps, in the order the sidebar lists them.
    pub fn all() -> [Basemap; 5] {
        [
            Self::Osm,
            Self::Satellite,
            Self::Streets,
            Self::Topo,
            Self::Dark,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Osm => "OpenStreetMap",
            Self::Satellite => "Satelit",
            Self::Streets => "Streets",
            Self::Topo => "Topografi",
            Self::Dark => "Dark",
        }
    }

    /// Tile URL template ({z}/{x}/{y} placeholders).
    pub fn tile_url(&self) -> &'static str {
        match self {
            Self::Osm => "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            Self::Satellite => {
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}"
            }
            Self::Streets => {
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Street_Map/MapServer/tile/{z}/{y}/{x}"
            }
            Self::Topo => {
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Topo_Map/MapServer/tile/{z}/{y}/{x}"
            }
            Self::Dark => {
                "https://server.arcgisonline.com/ArcGIS/rest/services/Canvas/World_Dark_Gray_Base/MapServer/tile/{z}/{y}/{x}"
            }
        }
    }

    /// Attribution line the renderer must display for this basemap.
    pub fn attribution(&self) -> &'static str {
        match self {
            Self::Osm => "© OpenStreetMap contributors",
            _ => "Tiles © Esri",
        }
    }
}

impl Default for Basemap {
    fn default() -> Self {
        Self::Osm
    }
}

impl fmt::Display for Basemap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Osm => write!(f, "osm"),
            Self::Satellite => write!(f, "satellite"),
            Self::Streets => write!(f, "streets"),
            Self::Topo => write!(f, "topo"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Basemap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "osm" | "openstreetmap" => Ok(Self::Osm),
            "satellite" | "satelit" => Ok(Self::Satellite),
            "streets" => Ok(Self::Streets),
            "topo" | "topografi" => Ok(Self::Topo),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("Unknown basemap: {}", s)),
        }
    }
}

/// Fill and outline styling for the parcel layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonStyle {
    /// Fill color, hex.
    pub fill_color: String,
    /// Outline color, hex.
    pub outline_color: String,
    /// Fill opacity, 0.0–1.0.
    pub fill_opacity: f64,
}

impl Default for PolygonStyle {
    fn default() -> Self {
        Self {
            fill_color: "#1e4a8c".to_string(),
            outline_color: "#0f2d5a".to_string(),
            fill_opacity: 0.35,
        }
    }
}

/// Startup map view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSettings {
    /// Initial center latitude.
    pub center_lat: f64,
    /// Initial center longitude.
    pub center_lng: f64,
    /// Initial zoom level.
    pub zoom: u8,
    /// Zoom ceiling when framing a selected parcel.
    pub fit_max_zoom: u8,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center_lat: -7.34,
            center_lng: 112.67,
            zoom: 13,
            fit_max_zoom: 17,
        }
    }
}

/// Data source location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    /// Path of the parcel GeoJSON export.
    pub data_path: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data.geojson"),
        }
    }
}

/// Complete viewer configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Selected basemap.
    pub basemap: Basemap,
    /// Parcel layer styling.
    pub polygon_style: PolygonStyle,
    /// Startup view.
    pub map: MapSettings,
    /// Data source location.
    pub data: DataSettings,
}

impl ViewerConfig {
    /// New config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML, by extension).
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(SettingsError::Load(
                "config file must be .json or .toml".to_string(),
            ));
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML, by extension).
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)
                .map_err(|e| SettingsError::Save(e.to_string()))?
        } else {
            return Err(SettingsError::Save(
                "config file must be .json or .toml".to_string(),
            ));
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration values.
    pub fn validate(&self) -> SettingsResult<()> {
        if !(0.0..=1.0).contains(&self.polygon_style.fill_opacity) {
            return Err(SettingsError::InvalidSetting {
                key: "polygon_style.fill_opacity".to_string(),
                reason: "must be between 0 and 1".to_string(),
            });
        }

        for (key, color) in [
            ("polygon_style.fill_color", &self.polygon_style.fill_color),
            ("polygon_style.outline_color", &self.polygon_style.outline_color),
        ] {
            if color.is_empty() {
                return Err(SettingsError::InvalidSetting {
                    key: key.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }

        if self.map.zoom == 0 || self.map.zoom > 22 {
            return Err(SettingsError::InvalidSetting {
                key: "map.zoom".to_string(),
                reason: "must be between 1 and 22".to_string(),
            });
        }

        if !(-90.0..=90.0).contains(&self.map.center_lat) {
            return Err(SettingsError::InvalidSetting {
                key: "map.center_lat".to_string(),
                reason: "must be between -90 and 90".to_string(),
            });
        }

        if !(-180.0..=180.0).contains(&self.map.center_lng) {
            return Err(SettingsError::InvalidSetting {
                key: "map.center_lng".to_string(),
                reason: "must be between -180 and 180".to_string(),
            });
        }

        Ok(())
    }

    /// Default config file location in the platform config directory.
    pub fn default_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| SettingsError::ConfigDirectory("no config directory".to_string()))?;
        Ok(base.join("asetgis").join("viewer.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let config = ViewerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.basemap, Basemap::Osm);
        assert_eq!(config.polygon_style.fill_opacity, 0.35);
        assert_eq!(config.map.zoom, 13);
    }

    #[test]
    fn test_basemap_parse_and_display() {
        assert_eq!("osm".parse::<Basemap>().unwrap(), Basemap::Osm);
        assert_eq!("Satelit".parse::<Basemap>().unwrap(), Basemap::Satellite);
        assert!("mercator".parse::<Basemap>().is_err());
        assert_eq!(Basemap::Dark.to_string(), "dark");
        assert_eq!(Basemap::all().len(), 5);
    }

    #[test]
    fn test_basemap_static_data() {
        for basemap in Basemap::all() {
            assert!(basemap.tile_url().contains("{z}"));
            assert!(!basemap.attribution().is_empty());
            assert!(!basemap.label().is_empty());
        }
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("viewer.json");

        let mut config = ViewerConfig::default();
        config.basemap = Basemap::Satellite;
        config.polygon_style.fill_opacity = 0.5;
        config.save_to_file(&path).unwrap();

        let loaded = ViewerConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("viewer.toml");

        let config = ViewerConfig::default();
        config.save_to_file(&path).unwrap();

        let loaded = ViewerConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let config = ViewerConfig::default();
        assert!(matches!(
            config.save_to_file(Path::new("viewer.yaml")),
            Err(SettingsError::Save(_))
        ));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("viewer.json");
        std::fs::write(&path, r#"{ "basemap": "dark" }"#).unwrap();

        let loaded = ViewerConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.basemap, Basemap::Dark);
        assert_eq!(loaded.map, MapSettings::default());
    }

    #[test]
    fn test_validation_rejects_bad_opacity() {
        let mut config = ViewerConfig::default();
        config.polygon_style.fill_opacity = 1.5;
        assert!(matches!(
            config.validate(),
            Err(SettingsError::InvalidSetting { .. })
        ));
        // An invalid config must not reach the disk either.
        assert!(config.save_to_file(Path::new("viewer.json")).is_err());
    }

    #[test]
    fn test_validation_rejects_bad_view() {
        let mut config = ViewerConfig::default();
        config.map.zoom = 0;
        assert!(config.validate().is_err());

        let mut config = ViewerConfig::default();
        config.map.center_lat = 120.0;
        assert!(config.validate().is_err());
    }
}
