//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, has_selection: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    let (modifiers, key_z_pressed, key_y_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
        )
    });

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    // Escape (Selektion aufheben), Delete (Punkt löschen), Ctrl+E (Export), Home (Ansicht)
    let (key_escape_pressed, key_del_pressed, key_e_pressed, key_home_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
            i.key_pressed(egui::Key::E),
            i.key_pressed(egui::Key::Home),
        )
    });

    if key_escape_pressed && has_selection {
        events.push(AppIntent::ClearSelectionRequested);
    }

    if key_del_pressed && has_selection {
        events.push(AppIntent::DeleteSelectedPointRequested);
    }

    if modifiers.command && key_e_pressed {
        events.push(AppIntent::ExportRequested);
    }

    if key_home_pressed {
        events.push(AppIntent::ResetViewRequested);
    }

    events
}
