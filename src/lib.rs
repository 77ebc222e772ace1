//! GeoShape Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod geojson;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditHistory, SelectionState, ShapeSettings,
    UiState, ViewState,
};
pub use core::{GeoBounds, GeoPoint, Geometry, LineType, MapType, MapView, PolylineMode, ShapeType};
pub use geojson::{build_feature, to_json_string, write_feature_file, ExportSettings, Feature};
pub use shared::{EditorOptions, RenderScene};
