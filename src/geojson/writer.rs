//! Writer für GeoJSON-Features.

use super::feature::{Feature, FeatureGeometry, FeatureProperties, Position};
use crate::core::{round_to, Geometry, LineType, PolylineMode, ShapeType};
use crate::shared::cumulative_fractions;
use anyhow::{Context, Result};
use std::path::Path;

/// Nachkommastellen der exportierten Koordinaten.
pub const COORDINATE_DECIMALS: u32 = 5;
/// Nachkommastellen der exportierten Streckenanteile.
pub const PERCENTAGE_DECIMALS: u32 = 4;

/// Export-relevante Einstellungen zum Zeitpunkt des Exports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSettings {
    pub shape_type: ShapeType,
    pub polyline_mode: PolylineMode,
    /// Beeinflusst nur die Darstellung; exportiert werden immer die Anker.
    pub line_type: LineType,
}

/// Baut das Feature für die aktuelle Geometrie.
///
/// Gibt `None` zurück, wenn ein Polygon mit weniger als drei Punkten
/// exportiert werden soll.
pub fn build_feature(geometry: &Geometry, settings: ExportSettings) -> Option<Feature> {
    let mut coordinates: Vec<Position> = geometry
        .points()
        .iter()
        .map(|p| p.to_lng_lat_rounded(COORDINATE_DECIMALS))
        .collect();

    match settings.shape_type {
        ShapeType::Polygon => {
            if coordinates.len() < ShapeType::Polygon.min_points() {
                return None;
            }
            close_ring(&mut coordinates);
            Some(Feature {
                geometry: FeatureGeometry::Polygon {
                    coordinates: vec![coordinates],
                },
                properties: FeatureProperties::default(),
            })
        }
        ShapeType::Polyline => {
            let percentages = match settings.polyline_mode {
                PolylineMode::Percentage => Some(
                    cumulative_fractions(geometry.points())
                        .into_iter()
                        .map(|f| round_to(f, PERCENTAGE_DECIMALS))
                        .collect(),
                ),
                PolylineMode::Plain => None,
            };
            Some(Feature {
                geometry: FeatureGeometry::LineString { coordinates },
                properties: FeatureProperties { percentages },
            })
        }
    }
}

/// Hängt die erste Position an, falls der Ring nicht bereits geschlossen ist.
fn close_ring(ring: &mut Vec<Position>) {
    if let (Some(&first), Some(&last)) = (ring.first(), ring.last()) {
        if first != last {
            ring.push(first);
        }
    }
}

/// Serialisiert ein Feature als kompaktes JSON.
pub fn to_json_string(feature: &Feature) -> Result<String> {
    serde_json::to_string(feature).context("GeoJSON-Feature konnte nicht serialisiert werden")
}

/// Schreibt ein Feature als UTF-8-JSON-Datei.
pub fn write_feature_file(path: &Path, feature: &Feature) -> Result<()> {
    let json = to_json_string(feature)?;
    std::fs::write(path, json)
        .with_context(|| format!("Datei konnte nicht geschrieben werden: {}", path.display()))?;
    log::info!(
        "{} mit {} Koordinaten exportiert nach: {}",
        feature.geometry.type_name(),
        coordinate_count(&feature.geometry),
        path.display()
    );
    Ok(())
}

/// Vorgeschlagener Dateiname: `<shapeType>.json`.
pub fn default_file_name(shape_type: ShapeType) -> String {
    format!("{}.json", shape_type.as_str())
}

fn coordinate_count(geometry: &FeatureGeometry) -> usize {
    match geometry {
        FeatureGeometry::LineString { coordinates } => coordinates.len(),
        FeatureGeometry::Polygon { coordinates } => coordinates.iter().map(Vec::len).sum(),
    }
}
