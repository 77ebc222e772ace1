use crate::app::{AppIntent, UiState};
use crate::core::ShapeType;
use crate::geojson;

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState, shape_type: ShapeType) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui_state.show_export_dialog {
        ui_state.show_export_dialog = false;

        let default_name = geojson::default_file_name(shape_type);
        let mut dialog = rfd::FileDialog::new()
            .add_filter("GeoJSON", &["json", "geojson"])
            .set_file_name(default_name.as_str());

        // Letztes Exportverzeichnis wiederverwenden
        if let Some(dir) = ui_state
            .last_export_path
            .as_deref()
            .and_then(|p| std::path::Path::new(p).parent())
        {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.save_file() {
            events.push(AppIntent::ExportPathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}
