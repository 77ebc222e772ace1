//! Auswahl-Enums für Form, Linienart, Export-Modus und Kartenstil.

use serde::{Deserialize, Serialize};

/// Art der gezeichneten Geometrie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    /// Offene Linie
    #[default]
    Polyline,
    /// Geschlossene Fläche (ab 3 Punkten)
    Polygon,
}

impl ShapeType {
    /// Alle Varianten in UI-Reihenfolge.
    pub const ALL: [ShapeType; 2] = [ShapeType::Polyline, ShapeType::Polygon];

    /// Bezeichner wie im Export-Dateinamen (`polyline`, `polygon`).
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeType::Polyline => "polyline",
            ShapeType::Polygon => "polygon",
        }
    }

    /// Mindestanzahl Punkte, ab der die Form gezeichnet und exportiert wird.
    pub fn min_points(self) -> usize {
        match self {
            ShapeType::Polyline => 2,
            ShapeType::Polygon => 3,
        }
    }
}

/// Linienart (nur für Polylinien relevant)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    /// Punkte werden direkt verbunden
    #[default]
    Straight,
    /// Catmull-Rom-Interpolation, einzelne Segmente können gerade bleiben
    Curved,
}

impl LineType {
    /// Alle Varianten in UI-Reihenfolge.
    pub const ALL: [LineType; 2] = [LineType::Straight, LineType::Curved];

    /// Anzeigename
    pub fn as_str(self) -> &'static str {
        match self {
            LineType::Straight => "straight",
            LineType::Curved => "curved",
        }
    }
}

/// Export-Modus (nur für Polylinien relevant)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolylineMode {
    /// Nur Koordinaten
    #[default]
    Plain,
    /// Zusätzlich kumulierte Streckenanteile je Punkt
    Percentage,
}

impl PolylineMode {
    /// Alle Varianten in UI-Reihenfolge.
    pub const ALL: [PolylineMode; 2] = [PolylineMode::Plain, PolylineMode::Percentage];

    /// Anzeigename
    pub fn as_str(self) -> &'static str {
        match self {
            PolylineMode::Plain => "plain",
            PolylineMode::Percentage => "percentage",
        }
    }
}

/// Kartenstil des Hintergrunds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapType {
    /// Straßenkarte
    #[default]
    Street,
    /// Satellitenbild
    Satellite,
}

impl MapType {
    /// Alle Varianten in UI-Reihenfolge.
    pub const ALL: [MapType; 2] = [MapType::Street, MapType::Satellite];

    /// Anzeigename
    pub fn as_str(self) -> &'static str {
        match self {
            MapType::Street => "street",
            MapType::Satellite => "satellite",
        }
    }

    /// Kachel-Stil-ID des Kartenanbieters.
    pub fn style_id(self) -> &'static str {
        match self {
            MapType::Street => "streets-v11",
            MapType::Satellite => "satellite-v9",
        }
    }
}
