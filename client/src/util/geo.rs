//! GeoJSON feature collection types used for the map overlay.
//!
//! DESIGN
//! ======
//! The overlay dataset is a `FeatureCollection` of `MultiPolygon` features.
//! Field names mirror GeoJSON so serde round-trips keep the document intact
//! for the mapping surface that consumes it.

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// GeoJSON `FeatureCollection`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoData {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<GeoFeature>,
}

impl Default for GeoData {
    fn default() -> Self {
        Self::from_features(Vec::new())
    }
}

impl GeoData {
    #[must_use]
    pub fn from_features(features: Vec<GeoFeature>) -> Self {
        Self { kind: "FeatureCollection".to_owned(), features }
    }

    /// Decode a collection from JSON text.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// GeoJSON `Feature`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoFeature {
    #[serde(rename = "type")]
    pub kind: String,
    pub geometry: Option<GeoGeometry>,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl GeoFeature {
    /// Display name taken from the `name` property, if it is a string.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.properties.get("name").and_then(Value::as_str)
    }
}

/// GeoJSON `MultiPolygon` geometry: polygons of rings of `[lon, lat]` positions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<Vec<Vec<Vec<f64>>>>,
}

impl GeoGeometry {
    /// Every position in the geometry, in document order.
    pub fn positions(&self) -> impl Iterator<Item = &[f64]> {
        self.coordinates.iter().flatten().flatten().map(Vec::as_slice)
    }
}
