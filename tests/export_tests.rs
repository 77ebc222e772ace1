//! Integrationstests für den GeoJSON-Export über den Controller.

use approx::assert_relative_eq;
use geoshape_editor::{
    AppController, AppIntent, AppState, GeoPoint, LineType, PolylineMode, ShapeType,
};
use std::path::PathBuf;

fn temp_file(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "geoshape_editor_{}_{}.json",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

fn add_points(controller: &mut AppController, state: &mut AppState, points: &[(f64, f64)]) {
    for &(lat, lng) in points {
        controller
            .handle_intent(
                state,
                AppIntent::MapClicked {
                    position: GeoPoint::new(lat, lng),
                    shift: false,
                },
            )
            .expect("MapClicked");
    }
}

fn export(controller: &mut AppController, state: &mut AppState, path: &PathBuf) -> serde_json::Value {
    controller
        .handle_intent(
            state,
            AppIntent::ExportPathSelected {
                path: path.to_string_lossy().into_owned(),
            },
        )
        .expect("Export");
    let text = std::fs::read_to_string(path).expect("Exportdatei lesbar");
    let _ = std::fs::remove_file(path);
    serde_json::from_str(&text).expect("gültiges JSON")
}

#[test]
fn test_polyline_percentage_export_scenario() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::PolylineModeChanged {
                mode: PolylineMode::Percentage,
            },
        )
        .expect("PolylineModeChanged");
    add_points(&mut controller, &mut state, &[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0)]);

    let path = temp_file("percentages");
    let json = export(&mut controller, &mut state, &path);

    assert_eq!(json["type"], "Feature");
    assert_eq!(json["geometry"]["type"], "LineString");
    let percentages = json["properties"]["percentages"]
        .as_array()
        .expect("percentages vorhanden");
    let values: Vec<f64> = percentages.iter().filter_map(|v| v.as_f64()).collect();
    assert_eq!(values.len(), 3);
    assert_relative_eq!(values[0], 0.0);
    assert_relative_eq!(values[1], 0.5, epsilon = 1e-4);
    assert_relative_eq!(values[2], 1.0, epsilon = 1e-4);

    assert_eq!(state.ui.last_export_path.as_deref(), Some(path.to_string_lossy().as_ref()));
}

#[test]
fn test_polygon_export_closes_ring() {
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
    add_points(&mut controller, &mut state, &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);

    let path = temp_file("polygon");
    let json = export(&mut controller, &mut state, &path);

    assert_eq!(json["geometry"]["type"], "Polygon");
    let ring = json["geometry"]["coordinates"][0]
        .as_array()
        .expect("ein Ring");
    assert_eq!(ring.len(), 4);
    assert_eq!(ring.first(), ring.last());
    // [lng, lat]
    assert_eq!(ring[2], serde_json::json!([1.0, 1.0]));
    assert_eq!(ring[1], serde_json::json!([1.0, 0.0]));
}

#[test]
fn test_polygon_with_two_points_writes_nothing() {
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
    add_points(&mut controller, &mut state, &[(0.0, 0.0), (0.0, 1.0)]);

    let path = temp_file("too_small");
    controller
        .handle_intent(
            &mut state,
            AppIntent::ExportPathSelected {
                path: path.to_string_lossy().into_owned(),
            },
        )
        .expect("ExportPathSelected");

    assert!(!path.exists());
    assert!(state.ui.last_export_path.is_none());
}

#[test]
fn test_curved_polyline_exports_anchor_points_rounded() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::LineTypeChanged {
                line_type: LineType::Curved,
            },
        )
        .expect("LineTypeChanged");
    add_points(
        &mut controller,
        &mut state,
        &[(40.1234567, -74.9876543), (40.2, -74.9), (40.3, -74.95)],
    );

    let path = temp_file("curved");
    let json = export(&mut controller, &mut state, &path);

    let coordinates = json["geometry"]["coordinates"]
        .as_array()
        .expect("Koordinaten");
    assert_eq!(coordinates.len(), 3);
    assert_eq!(coordinates[0], serde_json::json!([-74.98765, 40.12346]));
    assert!(json["properties"].get("percentages").is_none());
}

#[test]
fn test_export_does_not_touch_history() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    add_points(&mut controller, &mut state, &[(0.0, 0.0), (0.0, 1.0)]);
    let cursor = state.history.cursor();

    let path = temp_file("history");
    export(&mut controller, &mut state, &path);

    assert_eq!(state.history.cursor(), cursor);
    assert!(!state.can_redo());
}
