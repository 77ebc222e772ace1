//! Use-Case: Punkt anhängen oder nach einem Index einfügen.

use crate::app::AppState;
use crate::core::GeoPoint;

/// Fügt `position` an `at` ein (`None` = anhängen) und bestätigt die Änderung.
///
/// Mit `straight` wird das Segment zum neuen Punkt als gerade markiert.
/// Eine Selektion hinter der Einfügestelle rückt mit.
pub fn add_point(state: &mut AppState, position: GeoPoint, at: Option<usize>, straight: bool) {
    let index = state.geometry.add_point(position, at, straight);

    if let Some(selected) = state.selection.selected_index.as_mut() {
        if *selected >= index {
            *selected += 1;
        }
    }

    state.commit_geometry();

    log::info!(
        "Punkt {} bei ({:.5}, {:.5}) hinzugefügt{} ({} Punkte)",
        index,
        position.lat,
        position.lng,
        if straight { ", Segment gerade" } else { "" },
        state.geometry.len()
    );
}
