//! Core-Domänentypen: Punkte, Geometrie, Formauswahl, Kartenausschnitt.

pub mod geo_point;
/// Geometrie-Speicher
///
/// Hält die geordnete Punktliste und die Markierungen gerader Segmente.
/// Bewusst frei von Seiteneffekten: Rendering und History liegen im App-Layer.
pub mod geometry;
pub mod map_view;
pub mod shape;

pub use geo_point::{round_to, GeoPoint};
pub use geometry::Geometry;
pub use map_view::{GeoBounds, MapView};
pub use shape::{LineType, MapType, PolylineMode, ShapeType};
