//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "{} | Points: {} | Straight segments: {}",
                state.settings.shape_type.as_str(),
                state.point_count(),
                state.geometry.straight_segments().len()
            ));

            ui.separator();

            let view = &state.view.map_view;
            ui.label(format!(
                "Zoom: {:.2} | Center: ({:.5}, {:.5})",
                view.zoom, view.center.lat, view.center.lng
            ));

            ui.separator();

            ui.label(format!("Map: {}", state.settings.map_type.style_id()));

            ui.separator();

            match state.selection.selected_index {
                Some(index) => ui.label(format!("Selected Point: {}", index)),
                None => ui.label("Selected Point: -"),
            };

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(egui::Color32::LIGHT_GREEN));
            }
        });
    });
}
