//! Handler für Undo/Redo-Operationen.

use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) {
    if let Some(prev) = state.history.undo(&state.geometry) {
        state.geometry = prev;
        state.clamp_selection();
        log::info!("Undo ausgeführt ({} Punkte)", state.geometry.len());
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) {
    if let Some(next) = state.history.redo() {
        state.geometry = next;
        state.clamp_selection();
        log::info!("Redo ausgeführt ({} Punkte)", state.geometry.len());
    } else {
        log::debug!("Redo: nichts zu tun");
    }
}
