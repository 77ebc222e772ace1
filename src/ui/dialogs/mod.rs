//! Dialoge: Datei-Auswahl für den Export.

mod file_dialogs;

pub use file_dialogs::handle_file_dialogs;
