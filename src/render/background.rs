//! Kartenhintergrund: Flächenfarbe je Kartenstil, Gradnetz und Kartengrenze.

use super::{RenderScene, ScreenProjection};
use crate::core::{GeoPoint, MapType};
use eframe::egui;

/// Mindestabstand der Gradnetz-Linien in Pixeln.
const GRID_MIN_SPACING_PX: f64 = 80.0;

/// Farben eines Kartenstils
struct Palette {
    fill: egui::Color32,
    grid: egui::Color32,
    bounds: egui::Color32,
}

fn palette(map_type: MapType) -> Palette {
    match map_type {
        MapType::Street => Palette {
            fill: egui::Color32::from_rgb(242, 239, 233),
            grid: egui::Color32::from_rgb(214, 208, 198),
            bounds: egui::Color32::from_rgb(160, 150, 135),
        },
        MapType::Satellite => Palette {
            fill: egui::Color32::from_rgb(46, 58, 44),
            grid: egui::Color32::from_rgb(70, 86, 66),
            bounds: egui::Color32::from_rgb(150, 170, 140),
        },
    }
}

/// Zeichnet den Hintergrund in `rect`.
pub(super) fn paint(
    painter: &egui::Painter,
    rect: egui::Rect,
    scene: &RenderScene,
    projection: &ScreenProjection<'_>,
) {
    let colors = palette(scene.map_type);
    painter.rect_filled(rect, 0.0, colors.fill);

    let step = grid_step_degrees(projection.pixels_per_degree());
    let top_left = projection.to_geo(rect.left_top());
    let bottom_right = projection.to_geo(rect.right_bottom());
    let stroke = egui::Stroke::new(1.0, colors.grid);

    for lng in grid_lines(top_left.lng, bottom_right.lng, step) {
        let x = projection.to_screen(GeoPoint::new(top_left.lat, lng)).x;
        painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], stroke);
    }
    for lat in grid_lines(bottom_right.lat, top_left.lat, step) {
        let y = projection.to_screen(GeoPoint::new(lat, top_left.lng)).y;
        painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], stroke);
    }

    if let Some(bounds) = scene.options.map_bounds {
        let a = projection.to_screen(bounds.south_west);
        let b = projection.to_screen(bounds.north_east);
        painter.rect_stroke(
            egui::Rect::from_two_pos(a, b),
            0.0,
            egui::Stroke::new(1.5, colors.bounds),
            egui::StrokeKind::Middle,
        );
    }
}

/// Gradnetz-Abstand (Zehnerpotenz), sodass Linien mindestens
/// `GRID_MIN_SPACING_PX` auseinander liegen.
fn grid_step_degrees(pixels_per_degree: f64) -> f64 {
    let min_step = GRID_MIN_SPACING_PX / pixels_per_degree.max(f64::MIN_POSITIVE);
    10f64.powf(min_step.log10().ceil())
}

/// Vielfache von `step` im Intervall `[from, to]`.
fn grid_lines(from: f64, to: f64, step: f64) -> impl Iterator<Item = f64> {
    let first = (from / step).ceil() as i64;
    let last = (to / step).floor() as i64;
    (first..=last).map(move |k| k as f64 * step)
}
