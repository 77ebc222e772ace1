//! Zeichnet Polylinie bzw. Polygon-Umriss.

use super::{color32, RenderScene, ScreenProjection};
use crate::core::ShapeType;
use eframe::egui;

/// Zeichnet den Linienzug der Szene, sobald genug Punkte vorhanden sind.
pub(super) fn paint(painter: &egui::Painter, scene: &RenderScene, projection: &ScreenProjection<'_>) {
    if !scene.has_shape() {
        return;
    }

    let stroke = egui::Stroke::new(scene.options.line_width_px, color32(scene.options.line_color));
    let screen: Vec<egui::Pos2> = scene.path.iter().map(|&p| projection.to_screen(p)).collect();

    match scene.shape_type {
        ShapeType::Polyline => {
            painter.add(egui::Shape::line(screen, stroke));
        }
        ShapeType::Polygon => {
            painter.add(egui::Shape::closed_line(screen, stroke));
        }
    }
}
