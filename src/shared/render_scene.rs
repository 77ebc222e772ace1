//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{GeoPoint, MapType, MapView, ShapeType};

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Anker-Punkte in Pfadreihenfolge (je ein Marker)
    pub points: Vec<GeoPoint>,
    /// Zu zeichnender Linienzug (bei gekrümmter Polylinie interpoliert)
    pub path: Vec<GeoPoint>,
    /// Polylinie oder Polygon
    pub shape_type: ShapeType,
    /// Index des selektierten Punkts
    pub selected_index: Option<usize>,
    /// Kartenstil des Hintergrunds
    pub map_type: MapType,
    /// Kartenausschnitt für diesen Frame
    pub view: MapView,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob genug Punkte für Linie bzw. Fläche vorhanden sind.
    pub fn has_shape(&self) -> bool {
        self.points.len() >= self.shape_type.min_points()
    }

    /// Gibt zurück, ob Marker gezeichnet werden.
    pub fn has_markers(&self) -> bool {
        !self.points.is_empty()
    }
}
