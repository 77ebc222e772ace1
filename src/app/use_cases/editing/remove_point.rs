//! Use-Case: Punkt löschen.

use crate::app::AppState;

/// Entfernt den Punkt an `index` und bestätigt die Änderung.
///
/// Die Selektion folgt der Umnummerierung: der gelöschte Punkt wird
/// abgewählt, dahinterliegende rücken um eins nach vorn.
pub fn remove_point(state: &mut AppState, index: usize) {
    let Some(removed) = state.geometry.remove_point(index) else {
        log::warn!(
            "Punkt {} nicht löschbar: nur {} Punkte vorhanden",
            index,
            state.geometry.len()
        );
        return;
    };

    state.selection.selected_index = match state.selection.selected_index {
        Some(selected) if selected == index => None,
        Some(selected) if selected > index => Some(selected - 1),
        other => other,
    };

    state.commit_geometry();

    log::info!(
        "Punkt {} bei ({:.5}, {:.5}) gelöscht ({} Punkte)",
        index,
        removed.lat,
        removed.lng,
        state.geometry.len()
    );
}
