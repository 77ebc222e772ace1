//! Use-Case-Funktionen für das Bearbeiten der Geometrie.
//!
//! Aufgeteilt nach Operation:
//! - `add_point`: Punkt anhängen oder einfügen
//! - `move_point`: Punkt verschieben (Drag-Ende)
//! - `remove_point`: Punkt löschen
//!
//! Jede erfolgreiche Mutation erzeugt genau einen History-Eintrag.

mod add_point;
mod move_point;
mod remove_point;

pub use add_point::add_point;
pub use move_point::move_point;
pub use remove_point::remove_point;
