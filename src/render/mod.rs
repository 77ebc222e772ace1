//! Rendering der Render-Szene mit dem egui-Painter.
//!
//! Zeichenreihenfolge: Hintergrund, Linie bzw. Fläche, Marker.
//! Der Renderer liest nur die `RenderScene` und hält keinen eigenen Zustand
//! zwischen Frames.

mod background;
mod marker_painter;
mod shape_painter;

pub use crate::shared::RenderScene;

use crate::core::GeoPoint;
use eframe::egui;
use glam::DVec2;

/// Zeichnet die komplette Szene in `rect`.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let projection = ScreenProjection::new(scene, rect);

    background::paint(painter, rect, scene, &projection);
    shape_painter::paint(painter, scene, &projection);
    marker_painter::paint(painter, scene, &projection);
}

/// Umrechnung Breite/Länge → Bildschirmposition für einen Frame.
pub struct ScreenProjection<'a> {
    scene: &'a RenderScene,
    origin: egui::Pos2,
    viewport_size: DVec2,
}

impl<'a> ScreenProjection<'a> {
    /// Erstellt die Projektion für die Szene im Viewport-Rechteck.
    pub fn new(scene: &'a RenderScene, rect: egui::Rect) -> Self {
        Self {
            scene,
            origin: rect.min,
            viewport_size: DVec2::new(rect.width() as f64, rect.height() as f64),
        }
    }

    /// Bildschirmposition eines Punkts.
    pub fn to_screen(&self, point: GeoPoint) -> egui::Pos2 {
        let local = self.scene.view.geo_to_screen(point, self.viewport_size);
        egui::pos2(
            self.origin.x + local.x as f32,
            self.origin.y + local.y as f32,
        )
    }

    /// Geografische Position einer Bildschirmposition.
    pub fn to_geo(&self, pos: egui::Pos2) -> GeoPoint {
        let local = DVec2::new(
            (pos.x - self.origin.x) as f64,
            (pos.y - self.origin.y) as f64,
        );
        self.scene.view.screen_to_geo(local, self.viewport_size)
    }

    /// Pixel pro Grad bei aktuellem Zoom.
    pub fn pixels_per_degree(&self) -> f64 {
        self.scene.view.pixels_per_degree()
    }
}

/// Konvertiert eine RGBA-Farbe aus den Optionen nach egui.
pub fn color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{build_render_scene, AppState};

    #[test]
    fn color_conversion_maps_unit_range() {
        assert_eq!(color32([1.0, 0.0, 0.0, 1.0]), egui::Color32::RED);
        assert_eq!(color32([0.0, 0.0, 0.0, 1.0]), egui::Color32::BLACK);
        assert_eq!(color32([2.0, -1.0, 1.0, 1.0]), egui::Color32::from_rgb(255, 0, 255));
    }

    #[test]
    fn projection_roundtrip_with_offset_rect() {
        let state = AppState::new();
        let scene = build_render_scene(&state, [800.0, 600.0]);
        let rect = egui::Rect::from_min_size(egui::pos2(20.0, 40.0), egui::vec2(800.0, 600.0));
        let projection = ScreenProjection::new(&scene, rect);

        let center = projection.to_screen(scene.view.center);
        assert!((center.x - 420.0).abs() < 1e-3);
        assert!((center.y - 340.0).abs() < 1e-3);

        let geo = projection.to_geo(egui::pos2(100.0, 500.0));
        let back = projection.to_screen(geo);
        assert!((back.x - 100.0).abs() < 1e-2);
        assert!((back.y - 500.0).abs() < 1e-2);
    }
}
