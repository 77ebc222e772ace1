use crate::core::Geometry;

/// Undo/Redo-Zeitleiste mit Geometrie-Snapshots.
///
/// `entries[cursor]` entspricht immer dem zuletzt bestätigten Zustand.
/// Beim Start enthält die Zeitleiste genau einen leeren Eintrag.
pub struct EditHistory {
    entries: Vec<Geometry>,
    cursor: usize,
    redo_stack: Vec<Geometry>,
    max_depth: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new_with_capacity(crate::shared::options::HISTORY_DEPTH)
    }
}

impl EditHistory {
    /// Erstellt eine neue Zeitleiste mit maximaler Tiefe.
    ///
    /// Mindestens zwei Einträge, damit immer ein Undo-Schritt möglich ist.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            entries: vec![Geometry::new()],
            cursor: 0,
            redo_stack: Vec::new(),
            max_depth: max_depth.max(2),
        }
    }

    /// Speichert eine Kopie von `geometry` hinter dem Cursor.
    ///
    /// Alles nach dem Cursor wird verworfen, der Redo-Stack geleert.
    pub fn commit(&mut self, geometry: &Geometry) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(geometry.clone());
        self.cursor += 1;
        self.redo_stack.clear();

        if self.entries.len() > self.max_depth {
            let overflow = self.entries.len() - self.max_depth;
            self.entries.drain(..overflow);
            self.cursor -= overflow;
        }
    }

    /// Einen Schritt zurück. `current` landet auf dem Redo-Stack.
    ///
    /// Gibt den wiederherzustellenden Zustand zurück, `None` am Anfang.
    pub fn undo(&mut self, current: &Geometry) -> Option<Geometry> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.redo_stack.push(current.clone());
        Some(self.entries.get(self.cursor).cloned().unwrap_or_default())
    }

    /// Einen rückgängig gemachten Schritt wiederholen.
    pub fn redo(&mut self) -> Option<Geometry> {
        let next = self.redo_stack.pop()?;
        self.cursor += 1;
        match self.entries.get_mut(self.cursor) {
            Some(slot) => *slot = next.clone(),
            None => {
                self.entries.truncate(self.cursor);
                self.entries.push(next.clone());
            }
        }
        Some(next)
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Aktuelle Position in der Zeitleiste
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Anzahl der Einträge in der Zeitleiste (mindestens 1)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Immer `false`: die Zeitleiste enthält mindestens den Starteintrag.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Verwirft alle Einträge und beginnt mit einem leeren Zustand.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries.push(Geometry::new());
        self.cursor = 0;
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoPoint;

    fn geometry_with(count: usize) -> Geometry {
        let mut geometry = Geometry::new();
        for i in 0..count {
            let f = i as f64;
            geometry.add_point(GeoPoint::new(f * 0.1, f * 0.2), None, i % 2 == 1);
        }
        geometry
    }

    #[test]
    fn fresh_history_has_single_empty_entry() {
        let history = EditHistory::new_with_capacity(10);
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn commit_advances_cursor() {
        let mut history = EditHistory::new_with_capacity(10);
        history.commit(&geometry_with(1));
        history.commit(&geometry_with(2));
        assert_eq!(history.cursor(), 2);
        assert_eq!(history.len(), 3);
        assert!(history.can_undo());
    }

    #[test]
    fn undo_at_start_is_noop() {
        let mut history = EditHistory::new_with_capacity(10);
        assert!(history.undo(&Geometry::new()).is_none());
        assert_eq!(history.cursor(), 0);
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_restores_previous_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.commit(&geometry_with(1));
        let current = geometry_with(2);
        history.commit(&current);

        let restored = history.undo(&current).expect("undo vorhanden");
        assert_eq!(restored, geometry_with(1));
        assert!(history.can_redo());

        let restored = history.undo(&restored).expect("undo vorhanden");
        assert!(restored.is_empty());
        assert!(!history.can_undo());
    }

    #[test]
    fn undo_then_redo_restores_exact_geometry() {
        let mut history = EditHistory::new_with_capacity(10);
        let mut live = Geometry::new();
        for i in 0..5 {
            live.add_point(GeoPoint::new(i as f64, 0.0), None, i == 3);
            history.commit(&live);
        }

        let before = live.clone();
        live = history.undo(&live).expect("undo");
        assert_ne!(live, before);
        live = history.redo().expect("redo");
        assert_eq!(live, before);
        assert_eq!(history.cursor(), 5);
    }

    #[test]
    fn multiple_undo_redo_walk_back_and_forth() {
        let mut history = EditHistory::new_with_capacity(10);
        let states: Vec<Geometry> = (1..=4).map(geometry_with).collect();
        for s in &states {
            history.commit(s);
        }

        let mut live = states[3].clone();
        for expected in [&states[2], &states[1], &states[0]] {
            live = history.undo(&live).unwrap();
            assert_eq!(&live, expected);
        }
        for expected in [&states[1], &states[2], &states[3]] {
            live = history.redo().unwrap();
            assert_eq!(&live, expected);
        }
        assert!(!history.can_redo());
    }

    #[test]
    fn commit_after_undo_clears_redo_and_truncates() {
        let mut history = EditHistory::new_with_capacity(10);
        history.commit(&geometry_with(1));
        history.commit(&geometry_with(2));
        let live = history.undo(&geometry_with(2)).unwrap();
        assert!(history.can_redo());

        let mut branched = live.clone();
        branched.add_point(GeoPoint::new(9.0, 9.0), None, false);
        history.commit(&branched);

        assert!(!history.can_redo());
        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 2);
    }

    #[test]
    fn snapshots_are_value_copies() {
        let mut history = EditHistory::new_with_capacity(10);
        let mut live = geometry_with(2);
        history.commit(&live);
        live.add_point(GeoPoint::new(5.0, 5.0), None, false);
        live.move_point(0, GeoPoint::new(-1.0, -1.0));
        history.commit(&live);

        let restored = history.undo(&live).unwrap();
        assert_eq!(restored, geometry_with(2));
    }

    #[test]
    fn depth_limit_drops_oldest_entries() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 1..=5 {
            history.commit(&geometry_with(i));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 2);

        let live = history.undo(&geometry_with(5)).unwrap();
        assert_eq!(live, geometry_with(4));
        let live = history.undo(&live).unwrap();
        assert_eq!(live, geometry_with(3));
        assert!(!history.can_undo());
    }

    #[test]
    fn tiny_depth_still_allows_one_undo() {
        for depth in [0, 1, 2] {
            let mut history = EditHistory::new_with_capacity(depth);
            history.commit(&geometry_with(1));
            history.commit(&geometry_with(2));
            assert!(history.can_undo());
            assert_eq!(history.len(), 2);

            let live = history.undo(&geometry_with(2)).unwrap();
            assert_eq!(live, geometry_with(1));
            assert!(!history.can_undo());
        }
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut history = EditHistory::new_with_capacity(10);
        history.commit(&geometry_with(1));
        history.undo(&geometry_with(1));
        history.reset();
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
