//! Application State: zentrale Datenhaltung der Editor-Sitzung.

use super::history::EditHistory;
use super::CommandLog;
use crate::core::{Geometry, LineType, MapType, MapView, PolylineMode, ShapeType};
use crate::geojson::ExportSettings;
use crate::shared::EditorOptions;
use glam::DVec2;

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Index des selektierten Punkts (höchstens einer)
    pub selected_index: Option<usize>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_index: None,
        }
    }

    /// Prüft, ob `index` selektiert ist.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_index == Some(index)
    }

    /// Hebt die Selektion auf.
    pub fn clear(&mut self) {
        self.selected_index = None;
    }
}

/// Vom Benutzer gewählte Form- und Darstellungsoptionen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShapeSettings {
    /// Polylinie oder Polygon
    pub shape_type: ShapeType,
    /// Export mit oder ohne Streckenanteile (nur Polylinie)
    pub polyline_mode: PolylineMode,
    /// Gerade oder gekrümmte Darstellung (nur Polylinie)
    pub line_type: LineType,
    /// Stil der Hintergrundkarte
    pub map_type: MapType,
}

impl ShapeSettings {
    /// Gibt zurück, ob die Geometrie als Spline gezeichnet wird.
    pub fn draws_curves(&self) -> bool {
        self.shape_type == ShapeType::Polyline && self.line_type == LineType::Curved
    }

    /// Gibt zurück, ob Polyline-Modus und Linientyp wählbar sind.
    pub fn polyline_controls_visible(&self) -> bool {
        self.shape_type == ShapeType::Polyline
    }

    /// Einstellungen für den GeoJSON-Export.
    pub fn export_settings(&self) -> ExportSettings {
        ExportSettings {
            shape_type: self.shape_type,
            polyline_mode: self.polyline_mode,
            line_type: self.line_type,
        }
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Default)]
pub struct UiState {
    /// Ob der Export-Speichern-Dialog geöffnet werden soll
    pub show_export_dialog: bool,
    /// Pfad des letzten erfolgreichen Exports
    pub last_export_path: Option<String>,
    /// Temporäre Statusnachricht (z.B. nach dem Export)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self {
            show_export_dialog: false,
            last_export_path: None,
            status_message: None,
        }
    }
}

/// View-bezogener Anwendungszustand
#[derive(Default)]
pub struct ViewState {
    /// Aktueller Kartenausschnitt
    pub map_view: MapView,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den View-Zustand am konfigurierten Startausschnitt.
    pub fn new(options: &EditorOptions) -> Self {
        Self {
            map_view: options.initial_map_view(),
            viewport_size: [0.0, 0.0],
        }
    }

    /// Viewport-Größe als Vektor für die Umrechnung Pixel ↔ Grad.
    pub fn viewport_dvec2(&self) -> DVec2 {
        DVec2::new(self.viewport_size[0] as f64, self.viewport_size[1] as f64)
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelle Geometrie (Punkte + gerade Segmente)
    pub geometry: Geometry,
    /// Undo/Redo-Zeitleiste
    pub history: EditHistory,
    /// Selection-State
    pub selection: SelectionState,
    /// Form- und Darstellungsoptionen
    pub settings: ShapeSettings,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Kurven, Farben, Kartenausschnitt)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen neuen, leeren App-State mit den gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            geometry: Geometry::new(),
            history: EditHistory::new_with_capacity(options.history_depth),
            selection: SelectionState::new(),
            settings: ShapeSettings::default(),
            view: ViewState::new(&options),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Punkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.geometry.len()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Gibt zurück, ob die aktuelle Geometrie exportiert werden kann.
    pub fn can_export(&self) -> bool {
        self.settings.shape_type != ShapeType::Polygon
            || self.geometry.len() >= ShapeType::Polygon.min_points()
    }

    /// Speichert die aktuelle Geometrie als neuen History-Eintrag.
    /// Wird von jedem mutierenden Use-Case nach der Mutation aufgerufen.
    pub fn commit_geometry(&mut self) {
        self.history.commit(&self.geometry);
    }

    /// Hebt eine Selektion auf, die nicht mehr auf einen Punkt zeigt.
    pub fn clamp_selection(&mut self) {
        if let Some(index) = self.selection.selected_index {
            if index >= self.geometry.len() {
                self.selection.clear();
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
