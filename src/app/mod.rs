//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
/// Undo/Redo-Zeitleiste
///
/// Hält Geometrie-Snapshots als Werte, unabhängig von der Live-Geometrie.
pub mod history;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Editor-Sitzung (Geometrie, History, Selektion, Ansicht).
pub mod state;
pub mod use_cases;

pub use crate::core::{Geometry, LineType, MapType, PolylineMode, ShapeType};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use history::EditHistory;
pub use render_scene::build as build_render_scene;
pub use state::{AppState, SelectionState, ShapeSettings, UiState, ViewState};
