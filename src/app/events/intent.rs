use crate::core::{GeoPoint, LineType, MapType, PolylineMode, ShapeType};
use glam::DVec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Kartenausschnitt auf Startposition zurücksetzen
    ResetViewRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Karte um ein Pixel-Delta verschieben
    CameraPan { delta_px: DVec2 },
    /// Karte zoomen (optional auf einen Fokuspunkt in Viewport-Pixeln)
    CameraZoom {
        steps: f64,
        focus_px: Option<DVec2>,
    },
    /// Klick auf freie Kartenfläche
    MapClicked { position: GeoPoint, shift: bool },
    /// Klick auf einen Punkt-Marker
    PointClicked { index: usize },
    /// Punkt-Marker wurde an eine neue Position gezogen
    PointDragEnded { index: usize, position: GeoPoint },
    /// Formtyp im Toolbar gewechselt
    ShapeTypeChanged { shape_type: ShapeType },
    /// Polyline-Modus gewechselt
    PolylineModeChanged { mode: PolylineMode },
    /// Linientyp gewechselt
    LineTypeChanged { line_type: LineType },
    /// Kartenstil gewechselt
    MapTypeChanged { map_type: MapType },
    /// Letzte Änderung rückgängig machen
    UndoRequested,
    /// Rückgängig gemachte Änderung wiederholen
    RedoRequested,
    /// Selektion aufheben (Escape)
    ClearSelectionRequested,
    /// Selektierten Punkt löschen
    DeleteSelectedPointRequested,
    /// Export angefordert (öffnet Speichern-Dialog)
    ExportRequested,
    /// Zielpfad für den Export gewählt
    ExportPathSelected { path: String },
}
