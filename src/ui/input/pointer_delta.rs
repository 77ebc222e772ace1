//! Pointer-Delta-Verarbeitung: Karten-Pan.

use super::{InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;
use glam::DVec2;

impl InputState {
    /// Verarbeitet Maus-Bewegungs-Deltas für das Verschieben der Karte.
    pub(crate) fn handle_pointer_delta(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        let delta_px = DVec2::new(pointer_delta.x as f64, pointer_delta.y as f64);

        if ctx.response.dragged_by(egui::PointerButton::Primary) {
            if self.primary_drag_mode == PrimaryDragMode::CameraPan {
                events.push(AppIntent::CameraPan { delta_px });
            }
        } else if ctx.response.dragged_by(egui::PointerButton::Middle)
            || ctx.response.dragged_by(egui::PointerButton::Secondary)
        {
            events.push(AppIntent::CameraPan { delta_px });
        }
    }
}
