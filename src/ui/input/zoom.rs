//! Scroll-Zoom auf Mausposition.

use super::{InputState, ViewportContext};
use crate::app::AppIntent;
use glam::DVec2;

impl InputState {
    /// Verarbeitet Scroll-Zoom auf die aktuelle Mausposition.
    pub(crate) fn handle_scroll_zoom(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.hovered() {
            return;
        }
        let scroll = ctx.ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }

        let steps = scroll as f64 * ctx.options.scroll_zoom_per_pixel;
        let focus_px = ctx.response.hover_pos().map(|pos| {
            let local = pos - ctx.response.rect.min;
            DVec2::new(local.x as f64, local.y as f64)
        });
        events.push(AppIntent::CameraZoom { steps, focus_px });
    }
}
