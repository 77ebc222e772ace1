use crate::core::{GeoPoint, LineType, MapType, PolylineMode, ShapeType};
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Punkt einfügen (`at = None` hängt an)
    AddPoint {
        position: GeoPoint,
        at: Option<usize>,
        straight: bool,
    },
    /// Punkt an neue Position verschieben
    MovePoint { index: usize, position: GeoPoint },
    /// Punkt entfernen
    RemovePoint { index: usize },
    /// Punkt selektieren
    SelectPoint { index: usize },
    /// Selektion aufheben
    ClearSelection,

    /// Formtyp setzen (verwirft die Geometrie)
    SetShapeType { shape_type: ShapeType },
    /// Polyline-Modus setzen
    SetPolylineMode { mode: PolylineMode },
    /// Linientyp setzen
    SetLineType { line_type: LineType },
    /// Kartenstil setzen
    SetMapType { map_type: MapType },

    /// Undo
    Undo,
    /// Redo
    Redo,

    /// Export-Speichern-Dialog öffnen
    RequestExportDialog,
    /// Geometrie als GeoJSON in Datei schreiben
    ExportGeometry { path: String },

    /// Kartenausschnitt zurücksetzen
    ResetView,
    /// Eine Zoomstufe hinein
    ZoomIn,
    /// Eine Zoomstufe heraus
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Karte um Pixel-Delta verschieben
    PanView { delta_px: DVec2 },
    /// Karte zoomen
    ZoomView {
        steps: f64,
        focus_px: Option<DVec2>,
    },

    /// Anwendung beenden
    RequestExit,
}

impl AppCommand {
    /// Gibt zurück, ob der Command die Geometrie verändert.
    pub fn mutates_geometry(&self) -> bool {
        matches!(
            self,
            Self::AddPoint { .. }
                | Self::MovePoint { .. }
                | Self::RemovePoint { .. }
                | Self::SetShapeType { .. }
                | Self::Undo
                | Self::Redo
        )
    }
}
