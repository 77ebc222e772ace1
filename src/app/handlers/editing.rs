//! Handler für Punkt-Bearbeitung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GeoPoint;

/// Fügt einen Punkt hinzu (anhängen oder einfügen).
pub fn add_point(state: &mut AppState, position: GeoPoint, at: Option<usize>, straight: bool) {
    use_cases::editing::add_point(state, position, at, straight);
}

/// Verschiebt einen Punkt.
pub fn move_point(state: &mut AppState, index: usize, position: GeoPoint) {
    use_cases::editing::move_point(state, index, position);
}

/// Löscht einen Punkt.
pub fn remove_point(state: &mut AppState, index: usize) {
    use_cases::editing::remove_point(state, index);
}
