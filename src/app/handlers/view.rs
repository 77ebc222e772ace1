//! Handler für Kartenausschnitt und Viewport.

use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Setzt den Kartenausschnitt zurück.
pub fn reset_view(state: &mut AppState) {
    use_cases::camera::reset_view(state);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::camera::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::camera::zoom_out(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Verschiebt die Karte um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta_px: DVec2) {
    use_cases::camera::pan(state, delta_px);
}

/// Zoomt mit optionalem Fokuspunkt in Viewport-Pixeln.
pub fn zoom_towards(state: &mut AppState, steps: f64, focus_px: Option<DVec2>) {
    use_cases::camera::zoom_towards(state, steps, focus_px);
}
