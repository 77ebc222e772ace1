//! Use-Case-Funktionen für die Kartensteuerung.

use crate::app::AppState;
use glam::DVec2;

/// Setzt den Kartenausschnitt auf die Startposition zurück.
pub fn reset_view(state: &mut AppState) {
    state.view.map_view.reset();
}

/// Zoomt eine Stufe hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.map_view.zoom_by(1.0);
}

/// Zoomt eine Stufe heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.map_view.zoom_by(-1.0);
}

/// Verschiebt die Karte um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta_px: DVec2) {
    state.view.map_view.pan_pixels(delta_px);
}

/// Zoomt auf einen optionalen Fokuspunkt (Mausposition) hin.
///
/// Falls `focus_px` angegeben ist, bleibt die Position unter der Maus
/// nach dem Zoom an derselben Bildschirmstelle.
pub fn zoom_towards(state: &mut AppState, steps: f64, focus_px: Option<DVec2>) {
    match focus_px {
        Some(focus) => {
            let viewport = state.view.viewport_dvec2();
            state.view.map_view.zoom_towards(steps, focus, viewport);
        }
        None => state.view.map_view.zoom_by(steps),
    }
}
