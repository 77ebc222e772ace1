//! Use-Case-Funktionen für die Punkt-Selektion.

use crate::app::AppState;

/// Selektiert den Punkt an `index` (ersetzt eine bestehende Selektion).
pub fn select_point(state: &mut AppState, index: usize) {
    if index >= state.geometry.len() {
        log::warn!(
            "Punkt {} nicht selektierbar: nur {} Punkte vorhanden",
            index,
            state.geometry.len()
        );
        return;
    }
    state.selection.selected_index = Some(index);
    log::debug!("Punkt {} selektiert", index);
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    if state.selection.selected_index.take().is_some() {
        log::debug!("Selektion aufgehoben");
    }
}
