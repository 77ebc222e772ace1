//! Serde-Typen für ein einzelnes GeoJSON-Feature.

use serde::{Deserialize, Serialize};

/// GeoJSON-Position `[länge, breite]`
pub type Position = [f64; 2];

/// Ein GeoJSON-Feature mit Geometrie und Eigenschaften.
///
/// Das Feld `"type": "Feature"` wird von serde aus dem Strukturnamen erzeugt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Feature {
    pub geometry: FeatureGeometry,
    pub properties: FeatureProperties,
}

/// Geometrie-Teil eines Features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeatureGeometry {
    /// Offene Linie
    LineString { coordinates: Vec<Position> },
    /// Fläche aus genau einem geschlossenen Ring
    Polygon { coordinates: Vec<Vec<Position>> },
}

impl FeatureGeometry {
    /// GeoJSON-Typname der Geometrie.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::LineString { .. } => "LineString",
            Self::Polygon { .. } => "Polygon",
        }
    }
}

/// Eigenschaften eines Features. Leer wird als `{}` geschrieben.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    /// Kumulierter Streckenanteil je Punkt (nur im Prozent-Modus)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentages: Option<Vec<f64>>,
}
