//! Viewport-Input-Handling: Maus-Events, Marker-Drag, Scroll → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `clicks`: Klick auf Karte oder Marker
//! - `drag_primary`: Drag-Start/-Ende (Marker-Drag, Karten-Pan)
//! - `pointer_delta`: Pan-Deltas während aktiver Drags
//! - `zoom`: Scroll-Zoom auf Mausposition

mod clicks;
mod drag_primary;
mod pointer_delta;
mod zoom;

use super::keyboard;
use crate::app::AppIntent;
use crate::core::{GeoPoint, MapView};
use crate::render::color32;
use crate::shared::EditorOptions;
use glam::DVec2;

/// Modus des primären (Links-)Drags im Viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) enum PrimaryDragMode {
    #[default]
    None,
    /// Marker wird gezogen; Position in Bildschirmkoordinaten
    PointDrag { index: usize, current: egui::Pos2 },
    CameraPan,
}

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub map_view: &'a MapView,
    pub points: &'a [GeoPoint],
    pub options: &'a EditorOptions,
}

impl ViewportContext<'_> {
    /// Rechnet eine Bildschirmposition in Breite/Länge um.
    pub(crate) fn screen_to_geo(&self, pointer_pos: egui::Pos2) -> GeoPoint {
        self.map_view
            .screen_to_geo(self.local(pointer_pos), self.viewport_dvec2())
    }

    /// Index des Markers unter `pointer_pos`, falls einer im Klick-Radius liegt.
    pub(crate) fn pick_point(&self, pointer_pos: egui::Pos2) -> Option<usize> {
        pick_point(
            self.points,
            self.map_view,
            self.viewport_dvec2(),
            self.local(pointer_pos),
            self.options.point_hit_radius_px as f64,
        )
    }

    fn local(&self, pointer_pos: egui::Pos2) -> DVec2 {
        let local = pointer_pos - self.response.rect.min;
        DVec2::new(local.x as f64, local.y as f64)
    }

    fn viewport_dvec2(&self) -> DVec2 {
        DVec2::new(self.viewport_size[0] as f64, self.viewport_size[1] as f64)
    }
}

/// Verwaltet den Input-Zustand für das Viewport (Drag, Scroll)
#[derive(Default)]
pub struct InputState {
    pub(crate) primary_drag_mode: PrimaryDragMode,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            primary_drag_mode: PrimaryDragMode::None,
        }
    }

    #[allow(clippy::too_many_arguments)]
    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-, Scroll-
    /// und Drag-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        map_view: &MapView,
        points: &[GeoPoint],
        selected_index: Option<usize>,
        options: &EditorOptions,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            map_view,
            points,
            options,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        // Keyboard-Shortcuts (ausgelagert in keyboard/)
        events.extend(keyboard::collect_keyboard_intents(
            ui,
            selected_index.is_some(),
        ));

        let modifiers = ui.input(|i| i.modifiers);

        self.handle_drag_start(&ctx);
        self.handle_drag_update(&ctx);
        self.handle_drag_end(&ctx, &mut events);
        self.handle_clicks(&ctx, modifiers, &mut events);
        self.handle_pointer_delta(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        self.draw_point_drag_overlay(ui, options);
        update_hover_cursor(&ctx, self.primary_drag_mode);

        events
    }

    /// Zeichnet den gezogenen Marker an der aktuellen Zeigerposition.
    fn draw_point_drag_overlay(&self, ui: &egui::Ui, options: &EditorOptions) {
        let PrimaryDragMode::PointDrag { current, .. } = self.primary_drag_mode else {
            return;
        };
        ui.painter().circle(
            current,
            options.marker_radius_px,
            color32(options.marker_color_selected),
            egui::Stroke::new(1.5, color32(options.marker_outline_color)),
        );
    }
}

/// Zeigt über Markern einen Greif-Cursor.
fn update_hover_cursor(ctx: &ViewportContext, mode: PrimaryDragMode) {
    if matches!(mode, PrimaryDragMode::PointDrag { .. }) {
        ctx.ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        return;
    }
    if let Some(pos) = ctx.response.hover_pos() {
        if ctx.pick_point(pos).is_some() {
            ctx.ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }
    }
}

/// Sucht den Marker mit dem kleinsten Bildschirmabstand zu `local_pos`.
///
/// Bei gleichem Abstand gewinnt der später gezeichnete (obenliegende) Marker.
pub fn pick_point(
    points: &[GeoPoint],
    map_view: &MapView,
    viewport_size: DVec2,
    local_pos: DVec2,
    radius_px: f64,
) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .map(|(i, &p)| (i, map_view.geo_to_screen(p, viewport_size).distance(local_pos)))
        .filter(|&(_, d)| d <= radius_px)
        .fold(None, |best: Option<(usize, f64)>, (i, d)| match best {
            Some((_, best_d)) if best_d < d => best,
            _ => Some((i, d)),
        })
        .map(|(i, _)| i)
}
