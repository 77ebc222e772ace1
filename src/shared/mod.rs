//! Geteilte Typen und reine Funktionen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `geojson` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod geodesy;
pub mod options;
mod render_scene;
pub mod spline_geometry;

pub use geodesy::{cumulative_fractions, haversine_distance, path_length, EARTH_RADIUS_M};
pub use options::EditorOptions;
pub use render_scene::RenderScene;
pub use spline_geometry::{build_display_path, catmull_rom_chain, catmull_rom_point};
