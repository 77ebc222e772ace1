//! GeoJSON-Export der bearbeiteten Geometrie.
//!
//! Erzeugt genau ein `Feature` (LineString oder Polygon) mit optionalen
//! Streckenanteilen je Punkt. Import ist nicht vorgesehen.

pub mod feature;
pub mod writer;

pub use feature::{Feature, FeatureGeometry, FeatureProperties};
pub use writer::{
    build_feature, default_file_name, to_json_string, write_feature_file, ExportSettings,
    COORDINATE_DECIMALS, PERCENTAGE_DECIMALS,
};
