//! Use-Case: Punkt an eine neue Position verschieben.

use crate::app::AppState;
use crate::core::GeoPoint;

/// Ersetzt den Punkt an `index` durch `position` und bestätigt die Änderung.
///
/// Markierungen gerader Segmente bleiben unverändert.
pub fn move_point(state: &mut AppState, index: usize, position: GeoPoint) {
    let Some(previous) = state.geometry.move_point(index, position) else {
        log::warn!(
            "Punkt {} nicht verschiebbar: nur {} Punkte vorhanden",
            index,
            state.geometry.len()
        );
        return;
    };

    state.commit_geometry();

    log::info!(
        "Punkt {} verschoben: ({:.5}, {:.5}) → ({:.5}, {:.5})",
        index,
        previous.lat,
        previous.lng,
        position.lat,
        position.lng
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_keeps_markers_and_commits() {
        let mut state = AppState::new();
        state.geometry.add_point(GeoPoint::new(0.0, 0.0), None, false);
        state.geometry.add_point(GeoPoint::new(0.0, 1.0), None, true);
        state.commit_geometry();

        move_point(&mut state, 1, GeoPoint::new(1.0, 1.0));

        assert_eq!(state.geometry.point(1), Some(GeoPoint::new(1.0, 1.0)));
        assert!(state.geometry.is_segment_straight(0));
        assert_eq!(state.history.cursor(), 2);
    }

    #[test]
    fn out_of_range_move_is_ignored() {
        let mut state = AppState::new();
        state.geometry.add_point(GeoPoint::new(0.0, 0.0), None, false);

        move_point(&mut state, 3, GeoPoint::new(1.0, 1.0));

        assert_eq!(state.geometry.point(0), Some(GeoPoint::new(0.0, 0.0)));
        assert_eq!(state.history.cursor(), 0);
    }
}
