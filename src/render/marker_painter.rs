//! Zeichnet die Punkt-Marker (selektierter Punkt hervorgehoben).

use super::{color32, RenderScene, ScreenProjection};
use eframe::egui;

/// Zeichnet je Anker-Punkt einen gefüllten Kreis mit Umriss.
pub(super) fn paint(painter: &egui::Painter, scene: &RenderScene, projection: &ScreenProjection<'_>) {
    if !scene.has_markers() {
        return;
    }

    let options = &scene.options;
    let outline = egui::Stroke::new(1.5, color32(options.marker_outline_color));

    for (index, &point) in scene.points.iter().enumerate() {
        let fill = if scene.selected_index == Some(index) {
            color32(options.marker_color_selected)
        } else {
            color32(options.marker_color)
        };
        painter.circle(projection.to_screen(point), options.marker_radius_px, fill, outline);
    }
}
