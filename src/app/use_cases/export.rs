//! Use-Case-Funktionen für den GeoJSON-Export.

use crate::app::AppState;
use crate::geojson;
use std::path::Path;

/// Öffnet den Export-Speichern-Dialog über UI-State.
pub fn request_export_dialog(state: &mut AppState) {
    state.ui.show_export_dialog = true;
}

/// Schreibt die aktuelle Geometrie als GeoJSON-Feature nach `path`.
///
/// Die Geometrie wird nur gelesen, History und Selektion bleiben unberührt.
pub fn export_to_file(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let Some(feature) = geojson::build_feature(&state.geometry, state.settings.export_settings())
    else {
        log::warn!(
            "Export übersprungen: {} mit {} Punkten",
            state.settings.shape_type.as_str(),
            state.geometry.len()
        );
        return Ok(());
    };

    if let Err(e) = geojson::write_feature_file(Path::new(path), &feature) {
        state.ui.status_message = Some(format!("Export fehlgeschlagen: {}", path));
        return Err(e);
    }

    state.ui.last_export_path = Some(path.to_string());
    state.ui.status_message = Some(format!("Exportiert: {}", path));
    Ok(())
}
