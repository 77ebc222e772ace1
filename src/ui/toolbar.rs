//! Toolbar für Formauswahl, Linienart, Kartenstil und Undo/Redo.

use crate::app::{AppIntent, AppState};
use crate::core::{LineType, MapType, PolylineMode, ShapeType};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let settings = &state.settings;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Shape:");
            let mut shape_type = settings.shape_type;
            egui::ComboBox::from_id_salt("shape_type")
                .selected_text(shape_type.as_str())
                .show_ui(ui, |ui| {
                    for option in ShapeType::ALL {
                        ui.selectable_value(&mut shape_type, option, option.as_str());
                    }
                });
            if shape_type != settings.shape_type {
                events.push(AppIntent::ShapeTypeChanged { shape_type });
            }

            // Modus und Linienart nur für Polylinien
            if settings.polyline_controls_visible() {
                ui.separator();
                ui.label("Mode:");
                let mut mode = settings.polyline_mode;
                egui::ComboBox::from_id_salt("polyline_mode")
                    .selected_text(mode.as_str())
                    .show_ui(ui, |ui| {
                        for option in PolylineMode::ALL {
                            ui.selectable_value(&mut mode, option, option.as_str());
                        }
                    });
                if mode != settings.polyline_mode {
                    events.push(AppIntent::PolylineModeChanged { mode });
                }

                ui.label("Line:");
                let mut line_type = settings.line_type;
                egui::ComboBox::from_id_salt("line_type")
                    .selected_text(line_type.as_str())
                    .show_ui(ui, |ui| {
                        for option in LineType::ALL {
                            ui.selectable_value(&mut line_type, option, option.as_str());
                        }
                    });
                if line_type != settings.line_type {
                    events.push(AppIntent::LineTypeChanged { line_type });
                }
            }

            ui.separator();
            ui.label("Map:");
            let mut map_type = settings.map_type;
            egui::ComboBox::from_id_salt("map_type")
                .selected_text(map_type.as_str())
                .show_ui(ui, |ui| {
                    for option in MapType::ALL {
                        ui.selectable_value(&mut map_type, option, option.as_str());
                    }
                });
            if map_type != settings.map_type {
                events.push(AppIntent::MapTypeChanged { map_type });
            }

            ui.separator();

            if ui
                .add_enabled(state.can_undo(), egui::Button::new("Undo"))
                .clicked()
            {
                events.push(AppIntent::UndoRequested);
            }
            if ui
                .add_enabled(state.can_redo(), egui::Button::new("Redo"))
                .clicked()
            {
                events.push(AppIntent::RedoRequested);
            }

            ui.separator();

            if ui
                .add_enabled(state.can_export(), egui::Button::new("Export GeoJSON..."))
                .on_disabled_hover_text(format!(
                    "Mindestens {} Punkte nötig",
                    settings.shape_type.min_points()
                ))
                .clicked()
            {
                events.push(AppIntent::ExportRequested);
            }

            ui.separator();
            ui.label(format!("Points: {}", state.point_count()));
        });
    });

    events
}
