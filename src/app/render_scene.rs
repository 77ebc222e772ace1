//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::options::{CURVE_SAMPLES_PER_SEGMENT, CURVE_TENSION};
use crate::shared::{build_display_path, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Reiner Lesezugriff: mehrfaches Bauen pro Frame liefert dieselbe Szene.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let points = state.geometry.points().to_vec();

    let path = if state.settings.draws_curves() {
        build_display_path(
            &points,
            state.geometry.straight_segments(),
            CURVE_TENSION,
            CURVE_SAMPLES_PER_SEGMENT,
        )
    } else {
        points.clone()
    };

    RenderScene {
        points,
        path,
        shape_type: state.settings.shape_type,
        selected_index: state.selection.selected_index,
        map_type: state.settings.map_type,
        view: state.view.map_view.clone(),
        viewport_size,
        options: state.options.clone(),
    }
}
