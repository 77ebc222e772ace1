//! Top-Menü (File, Edit, View).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui
                    .add_enabled(state.can_export(), egui::Button::new("Export GeoJSON... (Ctrl+E)"))
                    .clicked()
                {
                    events.push(AppIntent::ExportRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui
                    .add_enabled(state.can_undo(), egui::Button::new("Undo (Ctrl+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::UndoRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(state.can_redo(), egui::Button::new("Redo (Ctrl+Y / Ctrl+Shift+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::RedoRequested);
                    ui.close();
                }

                ui.separator();

                let has_selection = state.selection.selected_index.is_some();
                if ui
                    .add_enabled(has_selection, egui::Button::new("Delete Point (Del)"))
                    .clicked()
                {
                    events.push(AppIntent::DeleteSelectedPointRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(has_selection, egui::Button::new("Deselect (Esc)"))
                    .clicked()
                {
                    events.push(AppIntent::ClearSelectionRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Zoom In").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom Out").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Reset View (Home)").clicked() {
                    events.push(AppIntent::ResetViewRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
