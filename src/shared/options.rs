//! Zentrale Konfiguration für den GeoShape Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{GeoBounds, GeoPoint};
use serde::{Deserialize, Serialize};

// ── Kurven ──────────────────────────────────────────────────────────

// Fest verdrahtet, nicht über die TOML-Datei änderbar.

/// Spline-Spannung (0.5 = Catmull-Rom).
pub const CURVE_TENSION: f64 = 0.5;
/// Interpolierte Punkte pro Segment.
pub const CURVE_SAMPLES_PER_SEGMENT: usize = 10;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl Einträge in der Undo-Zeitleiste.
pub const HISTORY_DEPTH: usize = 500;

// ── Kartenausschnitt ───────────────────────────────────────────────

/// Startmitte der Karte.
pub const MAP_START_CENTER: GeoPoint = GeoPoint::new(40.507476, -74.4541267);
/// Start-Zoomstufe.
pub const MAP_START_ZOOM: f64 = 14.0;
/// Minimale Zoomstufe.
pub const MAP_MIN_ZOOM: f64 = 13.0;
/// Maximale Zoomstufe.
pub const MAP_MAX_ZOOM: f64 = 20.0;
/// Südwestliche Ecke des erlaubten Kartenbereichs.
pub const MAP_BOUNDS_SOUTH_WEST: GeoPoint = GeoPoint::new(40.4550081, -74.4957839);
/// Nordöstliche Ecke des erlaubten Kartenbereichs.
pub const MAP_BOUNDS_NORTH_EAST: GeoPoint = GeoPoint::new(40.538852, -74.4074799);
/// Zoomstufen pro Pixel Mausrad-Scroll.
pub const SCROLL_ZOOM_PER_PIXEL: f64 = 0.01;

// ── Rendering ──────────────────────────────────────────────────────

/// Linienfarbe der Geometrie (RGBA: Blau).
pub const LINE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Linienstärke in Pixeln.
pub const LINE_WIDTH_PX: f32 = 3.0;
/// Radius der Punkt-Marker in Pixeln.
pub const MARKER_RADIUS_PX: f32 = 4.0;
/// Füllfarbe normaler Marker (RGBA: Weiß).
pub const MARKER_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Füllfarbe des selektierten Markers (RGBA: Rot).
pub const MARKER_COLOR_SELECTED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Outline-Farbe der Marker (RGBA: Schwarz).
pub const MARKER_OUTLINE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Klick-Radius um Marker in Pixeln.
pub const POINT_HIT_RADIUS_PX: f32 = 8.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `geoshape_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── History ─────────────────────────────────────────────────
    /// Maximale Tiefe der Undo-Zeitleiste
    pub history_depth: usize,

    // ── Kartenausschnitt ────────────────────────────────────────
    /// Start-Zoomstufe
    pub map_start_zoom: f64,
    /// Minimale Zoomstufe
    pub map_min_zoom: f64,
    /// Maximale Zoomstufe
    pub map_max_zoom: f64,
    /// Zoomstufen pro Pixel Mausrad-Scroll
    pub scroll_zoom_per_pixel: f64,

    // ── Rendering ───────────────────────────────────────────────
    /// Linienfarbe (RGBA)
    pub line_color: [f32; 4],
    /// Linienstärke in Pixeln
    pub line_width_px: f32,
    /// Marker-Radius in Pixeln
    pub marker_radius_px: f32,
    /// Füllfarbe normaler Marker
    pub marker_color: [f32; 4],
    /// Füllfarbe des selektierten Markers
    pub marker_color_selected: [f32; 4],
    /// Outline-Farbe der Marker
    pub marker_outline_color: [f32; 4],
    /// Klick-Radius um Marker in Pixeln
    pub point_hit_radius_px: f32,

    // ── Tabellen (in TOML nach den einfachen Werten) ─────────────
    /// Startmitte der Karte
    pub map_start_center: GeoPoint,
    /// Erlaubter Bereich für die Kartenmitte (None = unbegrenzt)
    pub map_bounds: Option<GeoBounds>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            history_depth: HISTORY_DEPTH,

            map_start_zoom: MAP_START_ZOOM,
            map_min_zoom: MAP_MIN_ZOOM,
            map_max_zoom: MAP_MAX_ZOOM,
            scroll_zoom_per_pixel: SCROLL_ZOOM_PER_PIXEL,

            line_color: LINE_COLOR,
            line_width_px: LINE_WIDTH_PX,
            marker_radius_px: MARKER_RADIUS_PX,
            marker_color: MARKER_COLOR,
            marker_color_selected: MARKER_COLOR_SELECTED,
            marker_outline_color: MARKER_OUTLINE_COLOR,
            point_hit_radius_px: POINT_HIT_RADIUS_PX,

            map_start_center: MAP_START_CENTER,
            map_bounds: Some(GeoBounds::new(MAP_BOUNDS_SOUTH_WEST, MAP_BOUNDS_NORTH_EAST)),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) if !opts.zoom_values_finite() => {
                    log::warn!("Zoomwerte in Optionen-Datei ungültig, verwende Standardwerte");
                    Self::default()
                }
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("geoshape_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("geoshape_editor.toml")
    }

    fn zoom_values_finite(&self) -> bool {
        [self.map_start_zoom, self.map_min_zoom, self.map_max_zoom]
            .iter()
            .all(|z| z.is_finite())
    }

    /// Erstellt den Start-Kartenausschnitt aus den Optionen.
    pub fn initial_map_view(&self) -> crate::core::MapView {
        crate::core::MapView::new(
            self.map_start_center,
            self.map_start_zoom,
            self.map_min_zoom,
            self.map_max_zoom,
            self.map_bounds,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_parameters_are_catmull_rom_constants() {
        assert_eq!(CURVE_TENSION, 0.5);
        assert_eq!(CURVE_SAMPLES_PER_SEGMENT, 10);
    }

    #[test]
    fn test_curve_keys_in_toml_are_ignored() {
        let opts: EditorOptions =
            toml::from_str("curve_tension = 0.9\ncurve_samples_per_segment = 3\n").expect("gültig");
        assert_eq!(opts, EditorOptions::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut opts = EditorOptions::default();
        opts.history_depth = 42;
        opts.map_start_zoom = 15.0;

        let text = toml::to_string_pretty(&opts).expect("serialisierbar");
        let back: EditorOptions = toml::from_str(&text).expect("deserialisierbar");
        assert_eq!(back, opts);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let opts: EditorOptions = toml::from_str("history_depth = 20\n").expect("gültig");
        assert_eq!(opts.history_depth, 20);
        assert_eq!(opts.map_start_zoom, MAP_START_ZOOM);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("geoshape_editor_missing_options.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }

    #[test]
    fn test_save_then_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "geoshape_editor_options_{}.toml",
            std::process::id()
        ));
        let mut opts = EditorOptions::default();
        opts.marker_radius_px = 6.0;

        opts.save_to_file(&path).expect("speicherbar");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, opts);
    }

    #[test]
    fn test_inverted_bounds_are_normalized() {
        let text = "[map_bounds.south_west]\nlat = 41.0\nlng = -74.0\n\n\
                    [map_bounds.north_east]\nlat = 40.0\nlng = -75.0\n";
        let opts: EditorOptions = toml::from_str(text).expect("gültig");
        let bounds = opts.map_bounds.expect("Grenzen gesetzt");
        assert_eq!(bounds.south_west, GeoPoint::new(40.0, -75.0));
        assert_eq!(bounds.north_east, GeoPoint::new(41.0, -74.0));

        let state = crate::app::AppState::with_options(opts);
        assert!(bounds.contains(state.view.map_view.center));
    }

    fn load_text(name: &str, text: &str) -> EditorOptions {
        let path = std::env::temp_dir().join(format!(
            "geoshape_editor_{}_{}.toml",
            name,
            std::process::id()
        ));
        std::fs::write(&path, text).expect("schreibbar");
        let opts = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        opts
    }

    #[test]
    fn test_nan_bounds_fall_back_to_defaults() {
        let opts = load_text(
            "nan_bounds",
            "history_depth = 7\n\n[map_bounds.south_west]\nlat = nan\nlng = -74.0\n\n\
             [map_bounds.north_east]\nlat = 40.0\nlng = -75.0\n",
        );
        assert_eq!(opts, EditorOptions::default());
        let _ = opts.initial_map_view();
    }

    #[test]
    fn test_nan_zoom_falls_back_to_defaults() {
        let opts = load_text("nan_zoom", "map_min_zoom = nan\nmap_max_zoom = nan\n");
        assert_eq!(opts, EditorOptions::default());
        let _ = opts.initial_map_view();
    }

    #[test]
    fn test_initial_view_starts_inside_bounds() {
        let opts = EditorOptions::default();
        let view = opts.initial_map_view();
        assert!(opts.map_bounds.expect("Standard hat Grenzen").contains(view.center));
        assert_eq!(view.zoom, MAP_START_ZOOM);
    }
}
