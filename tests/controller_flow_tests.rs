use geoshape_editor::{AppCommand, AppController, AppIntent, AppState, GeoPoint, ShapeType};
use geoshape_editor::{LineType, MapType};

fn click(controller: &mut AppController, state: &mut AppState, lat: f64, lng: f64) {
    controller
        .handle_intent(
            state,
            AppIntent::MapClicked {
                position: GeoPoint::new(lat, lng),
                shift: false,
            },
        )
        .expect("MapClicked sollte ohne Fehler durchlaufen");
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_map_clicks_append_points_and_enable_undo() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.can_undo());

    click(&mut controller, &mut state, 40.50, -74.45);
    click(&mut controller, &mut state, 40.51, -74.44);
    click(&mut controller, &mut state, 40.52, -74.43);

    assert_eq!(state.point_count(), 3);
    assert!(state.can_undo());
    assert!(!state.can_redo());
    assert_eq!(state.command_log.geometry_mutation_count(), 3);
}

#[test]
fn test_click_with_selection_inserts_after_selected_point() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 0.0, 2.0);

    controller
        .handle_intent(&mut state, AppIntent::PointClicked { index: 0 })
        .expect("PointClicked sollte ohne Fehler durchlaufen");
    assert_eq!(state.selection.selected_index, Some(0));

    click(&mut controller, &mut state, 0.0, 1.0);

    let lngs: Vec<f64> = state.geometry.points().iter().map(|p| p.lng).collect();
    assert_eq!(lngs, vec![0.0, 1.0, 2.0]);
    // Neuer Punkt wird selektiert, weitere Klicks setzen die Kette fort
    assert_eq!(state.selection.selected_index, Some(1));
}

#[test]
fn test_point_click_toggles_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 0.0, 0.0);

    controller
        .handle_intent(&mut state, AppIntent::PointClicked { index: 0 })
        .expect("erster Klick");
    assert_eq!(state.selection.selected_index, Some(0));

    controller
        .handle_intent(&mut state, AppIntent::PointClicked { index: 0 })
        .expect("zweiter Klick");
    assert_eq!(state.selection.selected_index, None);
}

#[test]
fn test_escape_intent_clears_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 0.0, 0.0);
    state.selection.selected_index = Some(0);

    controller
        .handle_intent(&mut state, AppIntent::ClearSelectionRequested)
        .expect("ClearSelectionRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.selection.selected_index, None);
    // Selektion ist kein History-Eintrag
    assert_eq!(state.history.cursor(), 1);
}

#[test]
fn test_undo_then_redo_restores_exact_geometry() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.settings.line_type = LineType::Curved;

    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 0.0, 1.0);
    controller
        .handle_intent(
            &mut state,
            AppIntent::MapClicked {
                position: GeoPoint::new(1.0, 1.0),
                shift: true,
            },
        )
        .expect("Shift-Klick");
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointDragEnded {
                index: 0,
                position: GeoPoint::new(-1.0, 0.5),
            },
        )
        .expect("Drag-Ende");

    let before = state.geometry.clone();

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo");
    assert_ne!(state.geometry, before);
    assert_eq!(state.geometry.point(0), Some(GeoPoint::new(0.0, 0.0)));

    controller
        .handle_intent(&mut state, AppIntent::RedoRequested)
        .expect("Redo");
    assert_eq!(state.geometry, before);
    assert!(state.geometry.is_segment_straight(1));
}

#[test]
fn test_undo_on_fresh_session_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo");
    controller
        .handle_intent(&mut state, AppIntent::RedoRequested)
        .expect("Redo");

    assert!(state.geometry.is_empty());
    assert!(!state.can_undo());
    assert!(!state.can_redo());
}

#[test]
fn test_undo_back_to_start_clears_stale_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 0.0, 1.0);
    state.selection.selected_index = Some(1);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo");

    assert_eq!(state.point_count(), 1);
    assert_eq!(state.selection.selected_index, None);
}

#[test]
fn test_new_edit_after_undo_discards_redo() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 0.0, 1.0);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo");
    assert!(state.can_redo());

    click(&mut controller, &mut state, 5.0, 5.0);
    assert!(!state.can_redo());
    assert_eq!(state.geometry.point(1), Some(GeoPoint::new(5.0, 5.0)));
}

#[test]
fn test_shape_type_change_resets_session() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 0.0, 1.0);
    state.selection.selected_index = Some(1);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ShapeTypeChanged {
                shape_type: ShapeType::Polygon,
            },
        )
        .expect("ShapeTypeChanged");

    assert_eq!(state.settings.shape_type, ShapeType::Polygon);
    assert!(state.geometry.is_empty());
    assert_eq!(state.selection.selected_index, None);
    assert!(!state.can_undo());
    assert!(!state.can_redo());
}

#[test]
fn test_same_shape_type_keeps_geometry() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 0.0, 0.0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ShapeTypeChanged {
                shape_type: ShapeType::Polyline,
            },
        )
        .expect("ShapeTypeChanged");

    assert_eq!(state.point_count(), 1);
    assert!(state.can_undo());
}

#[test]
fn test_map_type_change_keeps_geometry() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 0.0, 0.0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::MapTypeChanged {
                map_type: MapType::Satellite,
            },
        )
        .expect("MapTypeChanged");

    assert_eq!(state.settings.map_type, MapType::Satellite);
    assert_eq!(state.point_count(), 1);
}

#[test]
fn test_polygon_export_request_needs_three_points() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ShapeTypeChanged {
                shape_type: ShapeType::Polygon,
            },
        )
        .expect("ShapeTypeChanged");

    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 0.0, 1.0);

    controller
        .handle_intent(&mut state, AppIntent::ExportRequested)
        .expect("ExportRequested");
    assert!(!state.ui.show_export_dialog);

    click(&mut controller, &mut state, 1.0, 1.0);
    controller
        .handle_intent(&mut state, AppIntent::ExportRequested)
        .expect("ExportRequested");
    assert!(state.ui.show_export_dialog);
}

#[test]
fn test_render_scene_reflects_curved_polyline() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.settings.line_type = LineType::Curved;
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 1.0, 1.0);
    click(&mut controller, &mut state, 0.0, 2.0);

    let scene = controller.build_render_scene(&state, [800.0, 600.0]);

    assert_eq!(scene.points.len(), 3);
    assert_eq!(scene.path.len(), 2 * 10 + 1);
    assert!(scene.has_shape());
}
