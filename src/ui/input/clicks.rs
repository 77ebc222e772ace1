//! Klick-Events: Marker selektieren oder Punkt auf der Karte setzen.

use super::{InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Einfach-Klicks im Viewport.
    pub(crate) fn handle_clicks(
        &mut self,
        ctx: &ViewportContext,
        modifiers: egui::Modifiers,
        events: &mut Vec<AppIntent>,
    ) {
        if !ctx.response.clicked_by(egui::PointerButton::Primary) {
            return;
        }

        if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
            match ctx.pick_point(pointer_pos) {
                Some(index) => events.push(AppIntent::PointClicked { index }),
                None => events.push(AppIntent::MapClicked {
                    position: ctx.screen_to_geo(pointer_pos),
                    shift: modifiers.shift,
                }),
            }
        }

        self.primary_drag_mode = PrimaryDragMode::None;
    }
}
