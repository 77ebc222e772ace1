//! Use-Case-Funktionen für Form- und Darstellungsoptionen.

use crate::app::AppState;
use crate::core::{LineType, MapType, PolylineMode, ShapeType};

/// Wechselt den Formtyp und beginnt eine neue, leere Zeichnung.
///
/// Geometrie, History und Selektion werden verworfen.
pub fn set_shape_type(state: &mut AppState, shape_type: ShapeType) {
    let discarded = state.geometry.len();
    state.settings.shape_type = shape_type;
    state.geometry.clear();
    state.history.reset();
    state.selection.clear();
    log::info!(
        "Formtyp: {} ({} Punkte verworfen)",
        shape_type.as_str(),
        discarded
    );
}

/// Setzt den Polyline-Modus (wirkt nur auf den Export).
pub fn set_polyline_mode(state: &mut AppState, mode: PolylineMode) {
    state.settings.polyline_mode = mode;
    log::info!("Polyline-Modus: {}", mode.as_str());
}

/// Setzt den Linientyp (wirkt nur auf die Darstellung).
pub fn set_line_type(state: &mut AppState, line_type: LineType) {
    state.settings.line_type = line_type;
    log::info!("Linientyp: {}", line_type.as_str());
}

/// Setzt den Kartenstil.
pub fn set_map_type(state: &mut AppState, map_type: MapType) {
    state.settings.map_type = map_type;
    log::info!("Kartenstil: {} ({})", map_type.as_str(), map_type.style_id());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoPoint;

    #[test]
    fn shape_type_change_resets_drawing() {
        let mut state = AppState::new();
        state.geometry.add_point(GeoPoint::new(0.0, 0.0), None, false);
        state.commit_geometry();
        state.selection.selected_index = Some(0);

        set_shape_type(&mut state, ShapeType::Polygon);

        assert_eq!(state.settings.shape_type, ShapeType::Polygon);
        assert!(state.geometry.is_empty());
        assert_eq!(state.selection.selected_index, None);
        assert!(!state.can_undo());
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn line_type_change_keeps_geometry() {
        let mut state = AppState::new();
        state.geometry.add_point(GeoPoint::new(0.0, 0.0), None, false);

        set_line_type(&mut state, LineType::Curved);
        set_polyline_mode(&mut state, PolylineMode::Percentage);
        set_map_type(&mut state, MapType::Satellite);

        assert_eq!(state.point_count(), 1);
        assert!(state.settings.draws_curves());
        assert_eq!(state.settings.map_type, MapType::Satellite);
    }
}
