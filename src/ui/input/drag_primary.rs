//! Primärer Drag: Marker verschieben oder Karte ziehen.

use super::{InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Entscheidet beim Drag-Start zwischen Marker-Drag und Karten-Pan.
    pub(crate) fn handle_drag_start(&mut self, ctx: &ViewportContext) {
        if !ctx.response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }

        // press_origin() liefert die exakte Klickposition vor der Drag-Schwelle
        let press_pos = ctx.ui.input(|i| i.pointer.press_origin());
        let hit = press_pos.and_then(|pos| ctx.pick_point(pos).map(|index| (index, pos)));

        self.primary_drag_mode = match hit {
            Some((index, pos)) => PrimaryDragMode::PointDrag {
                index,
                current: ctx.response.interact_pointer_pos().unwrap_or(pos),
            },
            None => PrimaryDragMode::CameraPan,
        };
    }

    /// Führt die Vorschau-Position des gezogenen Markers nach.
    pub(crate) fn handle_drag_update(&mut self, ctx: &ViewportContext) {
        if !ctx.response.dragged_by(egui::PointerButton::Primary) {
            return;
        }
        if let PrimaryDragMode::PointDrag { current, .. } = &mut self.primary_drag_mode {
            if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                *current = pointer_pos;
            }
        }
    }

    /// Beendet den Drag; ein Marker-Drag wird als verschobener Punkt gemeldet.
    pub(crate) fn handle_drag_end(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.drag_stopped_by(egui::PointerButton::Primary) {
            return;
        }

        if let PrimaryDragMode::PointDrag { index, current } = self.primary_drag_mode {
            let release_pos = ctx.response.interact_pointer_pos().unwrap_or(current);
            events.push(AppIntent::PointDragEnded {
                index,
                position: ctx.screen_to_geo(release_pos),
            });
        }

        self.primary_drag_mode = PrimaryDragMode::None;
    }
}
