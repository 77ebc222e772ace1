//! Großkreis-Distanzen auf einer Kugel-Erde (Haversine).

use crate::core::GeoPoint;

/// Mittlerer Erdradius in Metern.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Großkreis-Distanz zwischen zwei Punkten in Metern.
pub fn haversine_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lng - a.lng).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Summe der Distanzen aufeinanderfolgender Punkte.
pub fn path_length(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|w| haversine_distance(w[0], w[1]))
        .sum()
}

/// Kumulierter Streckenanteil je Punkt (erster Punkt 0, letzter 1).
///
/// Leer bei weniger als zwei Punkten. Hat der Pfad die Länge 0 (alle
/// Punkte identisch), ist jeder Anteil 0.
pub fn cumulative_fractions(points: &[GeoPoint]) -> Vec<f64> {
    if points.len() < 2 {
        return Vec::new();
    }

    let total = path_length(points);
    let mut fractions = Vec::with_capacity(points.len());
    fractions.push(0.0);

    let mut travelled = 0.0;
    for w in points.windows(2) {
        travelled += haversine_distance(w[0], w[1]);
        fractions.push(if total > 0.0 { travelled / total } else { 0.0 });
    }

    fractions
}
