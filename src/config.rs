use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::{
    DEFAULT_CENTER, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_TILE_ATTRIBUTION, DEFAULT_TILE_URL,
    DEFAULT_ZOOM, ROUTE_API,
};
use crate::geometry::LatLng;

/// Tile layer and initial view of the map, plus where routes are requested from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub tile_url: String,
    pub tile_attribution: String,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub center: LatLng,
    pub zoom: f64,
    #[serde(default = "default_route_endpoint")]
    pub route_endpoint: String,
}

fn default_route_endpoint() -> String {
    ROUTE_API.to_string()
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: DEFAULT_TILE_URL.to_string(),
            tile_attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            center: LatLng::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            zoom: DEFAULT_ZOOM,
            route_endpoint: default_route_endpoint(),
        }
    }
}

/// Per-station marker label overrides, keyed by station name
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationLabels {
    overrides: HashMap<String, String>,
}

impl StationLabels {
    /// Parse a JSON object of `station name -> label`
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a JSON object of strings.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// The label table shipped with the application
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_json(include_str!("../config/station_labels.json")).unwrap_or_else(|e| {
            leptos::logging::error!("Invalid built-in station labels: {e}");
            Self::default()
        })
    }

    #[must_use]
    pub fn with_override(mut self, station: impl Into<String>, label: impl Into<String>) -> Self {
        self.overrides.insert(station.into(), label.into());
        self
    }

    /// Marker label for a station: its override if one exists, otherwise its name
    #[must_use]
    pub fn label_for<'a>(&'a self, station_name: &'a str) -> &'a str {
        self.overrides.get(station_name).map_or(station_name, String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_config_default() {
        let config = MapConfig::default();

        assert_eq!(config.center, LatLng::new(35.681_236, 139.767_125));
        assert_eq!(config.zoom, 11.0);
        assert_eq!(config.min_zoom, 5.0);
        assert_eq!(config.max_zoom, 18.0);
        assert!(config.tile_url.contains("cyberjapandata.gsi.go.jp"));
        assert_eq!(config.route_endpoint, "/api/route");
    }

    #[test]
    fn test_map_config_endpoint_defaults_when_missing() {
        let json = r#"{
            "tile_url": "https://tile.example/{z}/{x}/{y}.png",
            "tile_attribution": "example",
            "min_zoom": 3.0,
            "max_zoom": 19.0,
            "center": { "lat": 1.0, "lng": 2.0 },
            "zoom": 9.0
        }"#;
        let config: MapConfig = serde_json::from_str(json).expect("should parse");

        assert_eq!(config.route_endpoint, "/api/route");
        assert_eq!(config.center, LatLng::new(1.0, 2.0));
    }

    #[test]
    fn test_builtin_labels_contain_override() {
        let labels = StationLabels::builtin();

        assert_eq!(labels.len(), 1);
        assert_eq!(labels.label_for("東高円寺"), "東高円寺 (制作者の最寄り)");
    }

    #[test]
    fn test_label_for_falls_back_to_name() {
        let labels = StationLabels::default().with_override("A", "Alpha");

        assert_eq!(labels.label_for("A"), "Alpha");
        assert_eq!(labels.label_for("B"), "B");
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(StationLabels::from_json("[1, 2]").is_err());
    }
}
