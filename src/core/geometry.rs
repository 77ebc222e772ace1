//! Geometrie-Speicher: geordnete Punktliste plus Markierungen gerader Segmente.

use super::GeoPoint;
use std::collections::BTreeSet;

/// Aktuelle Zeichnung des Editors.
///
/// Die Reihenfolge der Punkte definiert den Pfad. Segment `i` verbindet
/// Punkt `i` mit Punkt `i + 1`; ist `i` in `straight_segments`, wird das
/// Segment bei gekrümmter Darstellung als Gerade gezeichnet.
///
/// Invariante: jede Markierung ist `< points.len() - 1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    points: Vec<GeoPoint>,
    straight_segments: BTreeSet<usize>,
}

impl Geometry {
    /// Erstellt eine leere Geometrie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut eine Geometrie aus vorhandenen Punkten und Markierungen.
    ///
    /// Markierungen, die kein gültiges Segment bezeichnen, werden verworfen.
    pub fn from_parts(points: Vec<GeoPoint>, straight_segments: impl IntoIterator<Item = usize>) -> Self {
        let mut geometry = Self {
            points,
            straight_segments: straight_segments.into_iter().collect(),
        };
        geometry.prune_invalid_markers();
        geometry
    }

    /// Read-only Sicht auf alle Punkte.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Read-only Sicht auf die Markierungen (aufsteigend sortiert).
    pub fn straight_segments(&self) -> &BTreeSet<usize> {
        &self.straight_segments
    }

    /// Prüft, ob Segment `index` als gerade markiert ist.
    pub fn is_segment_straight(&self, index: usize) -> bool {
        self.straight_segments.contains(&index)
    }

    /// Punkt an `index`, falls vorhanden.
    pub fn point(&self, index: usize) -> Option<GeoPoint> {
        self.points.get(index).copied()
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Entfernt alle Punkte und Markierungen.
    pub fn clear(&mut self) {
        self.points.clear();
        self.straight_segments.clear();
    }

    /// Fügt einen Punkt ein und gibt den tatsächlichen Index zurück.
    ///
    /// `at = None` (oder ein Index hinter dem Ende) hängt an. Beim Einfügen
    /// mitten in die Liste verfallen alle Markierungen ab dem Einfügeindex,
    /// Markierungen davor bleiben unverändert. Ist `straight` gesetzt und hat
    /// der neue Punkt einen Vorgänger, wird das Segment zum neuen Punkt als
    /// gerade markiert.
    pub fn add_point(&mut self, point: GeoPoint, at: Option<usize>, straight: bool) -> usize {
        let index = match at {
            Some(i) if i < self.points.len() => {
                self.straight_segments.retain(|&seg| seg < i);
                i
            }
            _ => self.points.len(),
        };

        self.points.insert(index, point);

        if straight && index > 0 {
            self.straight_segments.insert(index - 1);
        }

        index
    }

    /// Ersetzt den Punkt an `index` und gibt den alten Punkt zurück.
    ///
    /// Markierungen bleiben unberührt. `None` bei ungültigem Index.
    pub fn move_point(&mut self, index: usize, point: GeoPoint) -> Option<GeoPoint> {
        let slot = self.points.get_mut(index)?;
        Some(std::mem::replace(slot, point))
    }

    /// Entfernt den Punkt an `index` und gibt ihn zurück.
    ///
    /// Die Markierung `index` verfällt, alle größeren rücken um eins nach
    /// vorne. Danach ungültige Markierungen (am neuen Ende) werden verworfen.
    pub fn remove_point(&mut self, index: usize) -> Option<GeoPoint> {
        if index >= self.points.len() {
            return None;
        }
        let removed = self.points.remove(index);

        self.straight_segments = self
            .straight_segments
            .iter()
            .filter(|&&seg| seg != index)
            .map(|&seg| if seg > index { seg - 1 } else { seg })
            .collect();
        self.prune_invalid_markers();

        Some(removed)
    }

    fn prune_invalid_markers(&mut self) {
        let segment_count = self.points.len().saturating_sub(1);
        self.straight_segments.retain(|&seg| seg < segment_count);
    }
}
