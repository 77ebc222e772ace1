//! Handler für Form-, Linien- und Kartenoptionen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{LineType, MapType, PolylineMode, ShapeType};

/// Wechselt den Formtyp (verwirft die Zeichnung).
pub fn set_shape_type(state: &mut AppState, shape_type: ShapeType) {
    use_cases::settings::set_shape_type(state, shape_type);
}

/// Setzt den Polyline-Modus.
pub fn set_polyline_mode(state: &mut AppState, mode: PolylineMode) {
    use_cases::settings::set_polyline_mode(state, mode);
}

/// Setzt den Linientyp.
pub fn set_line_type(state: &mut AppState, line_type: LineType) {
    use_cases::settings::set_line_type(state, line_type);
}

/// Setzt den Kartenstil.
pub fn set_map_type(state: &mut AppState, map_type: MapType) {
    use_cases::settings::set_map_type(state, map_type);
}
