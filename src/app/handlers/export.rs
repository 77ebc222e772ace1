//! Handler für den GeoJSON-Export.

use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Export-Dialog.
pub fn request_dialog(state: &mut AppState) {
    use_cases::export::request_export_dialog(state);
}

/// Exportiert die Geometrie und propagiert Schreibfehler an den Aufrufer.
pub fn export(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::export::export_to_file(state, &path)
}
