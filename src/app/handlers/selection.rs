//! Handler für Selektions-Operationen.
//!
//! Die Selektion ist nicht Teil der History.

use crate::app::use_cases;
use crate::app::AppState;

/// Selektiert einen Punkt.
pub fn select_point(state: &mut AppState, index: usize) {
    use_cases::selection::select_point(state, index);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}
