//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        if command.mutates_geometry() {
            log::debug!(
                "{:?} ({} Geometrie-Änderungen im Log)",
                command,
                state.command_log.geometry_mutation_count()
            );
        }
        use super::handlers;

        match command {
            // === Editing ===
            AppCommand::AddPoint {
                position,
                at,
                straight,
            } => handlers::editing::add_point(state, position, at, straight),
            AppCommand::MovePoint { index, position } => {
                handlers::editing::move_point(state, index, position)
            }
            AppCommand::RemovePoint { index } => handlers::editing::remove_point(state, index),

            // === Selektion ===
            AppCommand::SelectPoint { index } => handlers::selection::select_point(state, index),
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Optionen ===
            AppCommand::SetShapeType { shape_type } => {
                handlers::settings::set_shape_type(state, shape_type)
            }
            AppCommand::SetPolylineMode { mode } => {
                handlers::settings::set_polyline_mode(state, mode)
            }
            AppCommand::SetLineType { line_type } => {
                handlers::settings::set_line_type(state, line_type)
            }
            AppCommand::SetMapType { map_type } => handlers::settings::set_map_type(state, map_type),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Export ===
            AppCommand::RequestExportDialog => handlers::export::request_dialog(state),
            AppCommand::ExportGeometry { path } => handlers::export::export(state, path)?,

            // === Kartenausschnitt & Viewport ===
            AppCommand::ResetView => handlers::view::reset_view(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanView { delta_px } => handlers::view::pan(state, delta_px),
            AppCommand::ZoomView { steps, focus_px } => {
                handlers::view::zoom_towards(state, steps, focus_px)
            }

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
