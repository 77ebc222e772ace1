//! Reine Geometrie-Funktionen für Catmull-Rom-Splines.
//!
//! Layer-neutral: kann von `app`, `render` und Benchmarks importiert werden
//! ohne Zirkel-Abhängigkeiten zu erzeugen.

use crate::core::GeoPoint;
use glam::DVec2;
use std::collections::BTreeSet;

/// Berechnet einen Punkt auf einem Kardinal-Spline-Segment (t ∈ [0, 1]).
///
/// p0, p1, p2, p3: vier aufeinanderfolgende Kontrollpunkte.
/// Die Kurve verläuft von p1 nach p2. `tension = 0.5` ergibt die
/// klassische Catmull-Rom-Kurve.
pub fn catmull_rom_point(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64, tension: f64) -> DVec2 {
    let t2 = t * t;
    let t3 = t2 * t;

    let m1 = (p2 - p0) * tension;
    let m2 = (p3 - p1) * tension;

    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    p1 * h00 + m1 * h10 + p2 * h01 + m2 * h11
}

/// Berechnet eine dichte Punktliste entlang einer Spline durch `points`.
///
/// Fehlende Nachbarn an den Rändern werden durch den nächsten vorhandenen
/// Anker ersetzt (geklemmter Rand). Pro Segment entstehen
/// `samples_per_segment` Punkte ab t = 0, danach folgt exakt der letzte Anker.
pub fn catmull_rom_chain(points: &[GeoPoint], tension: f64, samples_per_segment: usize) -> Vec<GeoPoint> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let samples = samples_per_segment.max(1);
    let anchors: Vec<DVec2> = points.iter().map(|p| p.to_dvec2()).collect();
    let n = anchors.len();
    let mut result = Vec::with_capacity((n - 1) * samples + 1);

    for seg in 0..(n - 1) {
        let p0 = anchors[seg.saturating_sub(1)];
        let p1 = anchors[seg];
        let p2 = anchors[seg + 1];
        let p3 = anchors[(seg + 2).min(n - 1)];

        for i in 0..samples {
            let t = i as f64 / samples as f64;
            result.push(GeoPoint::from_dvec2(catmull_rom_point(p0, p1, p2, p3, t, tension)));
        }
    }

    // Endpunkt immer exakt übernehmen
    result.push(points[n - 1]);
    result
}

/// Darstellungspfad für gemischte gerade/gekrümmte Polylinien.
///
/// Zerlegt die Anker in maximale Läufe nicht markierter Segmente. Jeder Lauf
/// wird für sich interpoliert, sodass Krümmung nicht über ein gerades Segment
/// hinweg wirkt. Für jedes gerade Segment werden beide Endpunkte wörtlich
/// übernommen. Ergibt die Zerlegung nichts, wird alles am Stück interpoliert.
pub fn build_display_path(
    points: &[GeoPoint],
    straight_segments: &BTreeSet<usize>,
    tension: f64,
    samples_per_segment: usize,
) -> Vec<GeoPoint> {
    if points.len() < 2 {
        return points.to_vec();
    }
    if straight_segments.is_empty() {
        return catmull_rom_chain(points, tension, samples_per_segment);
    }

    let n = points.len();
    let mut path = Vec::new();
    let mut curve_start = 0;

    for i in 1..n {
        if straight_segments.contains(&(i - 1)) {
            if curve_start < i - 1 {
                path.extend(catmull_rom_chain(
                    &points[curve_start..i],
                    tension,
                    samples_per_segment,
                ));
            }
            path.push(points[i - 1]);
            path.push(points[i]);
            curve_start = i;
        } else if i == n - 1 {
            path.extend(catmull_rom_chain(
                &points[curve_start..],
                tension,
                samples_per_segment,
            ));
        }
    }

    if path.is_empty() {
        return catmull_rom_chain(points, tension, samples_per_segment);
    }
    path
}
