//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::LineType;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta_px } => vec![AppCommand::PanView { delta_px }],
        AppIntent::CameraZoom { steps, focus_px } => {
            vec![AppCommand::ZoomView { steps, focus_px }]
        }

        AppIntent::MapClicked { position, shift } => {
            // Gerade Segmente gibt es nur bei gekrümmter Darstellung
            let straight = shift && state.settings.line_type == LineType::Curved;

            match state.selection.selected_index {
                Some(index) if index < state.geometry.len() => vec![
                    AppCommand::AddPoint {
                        position,
                        at: Some(index + 1),
                        straight,
                    },
                    AppCommand::SelectPoint { index: index + 1 },
                ],
                _ => vec![AppCommand::AddPoint {
                    position,
                    at: None,
                    straight,
                }],
            }
        }
        AppIntent::PointClicked { index } => {
            if index >= state.geometry.len() {
                log::warn!("Punkt-Klick auf ungültigen Index {} ignoriert", index);
                return vec![];
            }
            if state.selection.is_selected(index) {
                vec![AppCommand::ClearSelection]
            } else {
                vec![AppCommand::SelectPoint { index }]
            }
        }
        AppIntent::PointDragEnded { index, position } => {
            vec![AppCommand::MovePoint { index, position }]
        }
        AppIntent::DeleteSelectedPointRequested => match state.selection.selected_index {
            Some(index) => vec![AppCommand::RemovePoint { index }],
            None => vec![],
        },
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],

        AppIntent::ShapeTypeChanged { shape_type } => {
            if shape_type == state.settings.shape_type {
                vec![]
            } else {
                vec![AppCommand::SetShapeType { shape_type }]
            }
        }
        AppIntent::PolylineModeChanged { mode } => vec![AppCommand::SetPolylineMode { mode }],
        AppIntent::LineTypeChanged { line_type } => vec![AppCommand::SetLineType { line_type }],
        AppIntent::MapTypeChanged { map_type } => vec![AppCommand::SetMapType { map_type }],

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        AppIntent::ExportRequested => {
            if state.can_export() {
                vec![AppCommand::RequestExportDialog]
            } else {
                log::warn!(
                    "Export nicht möglich: Polygon benötigt mindestens 3 Punkte (aktuell {})",
                    state.point_count()
                );
                vec![]
            }
        }
        AppIntent::ExportPathSelected { path } => {
            if state.can_export() {
                vec![AppCommand::ExportGeometry { path }]
            } else {
                vec![]
            }
        }
    }
}
