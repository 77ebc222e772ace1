//! Geografischer Punkt (Breite/Länge) als unveränderlicher Wert.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Ein Punkt auf der Karte in Grad.
///
/// Wird bei Bearbeitung immer vollständig ersetzt, nie teilweise verändert.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Geografische Breite in Grad
    pub lat: f64,
    /// Geografische Länge in Grad
    pub lng: f64,
}

impl GeoPoint {
    /// Erstellt einen Punkt aus Breite und Länge.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Vektor-Darstellung für Spline-Arithmetik (x = Breite, y = Länge).
    #[inline]
    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.lat, self.lng)
    }

    /// Gegenstück zu [`GeoPoint::to_dvec2`].
    #[inline]
    pub fn from_dvec2(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }

    /// GeoJSON-Position `[länge, breite]`, auf `decimals` Nachkommastellen gerundet.
    pub fn to_lng_lat_rounded(self, decimals: u32) -> [f64; 2] {
        [round_to(self.lng, decimals), round_to(self.lat, decimals)]
    }
}

/// Rundet `value` auf `decimals` Nachkommastellen (kaufmännisch, weg von Null).
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    // -0.0 vermeiden, sonst schreibt serde_json "-0.0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
