//! Undo/Redo-History über Copy-on-Write-Snapshots.

use crate::core::WallGraph;
use std::sync::Arc;

/// Snapshot des Graphen zu einem Commit-Zeitpunkt.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1) —
/// der teure Graph-Klon findet erst beim nächsten `Arc::make_mut()` in einem
/// Handler statt. Der Snapshot trägt damit die kompletten Entity-Maps
/// inklusive transienter Flags, ohne sie zu duplizieren.
#[derive(Clone)]
pub struct Snapshot {
    /// Graph-Zustand (Arc-Klon für O(1)-Snapshot)
    pub graph: Arc<WallGraph>,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn of(graph: &Arc<WallGraph>) -> Self {
        Self {
            graph: Arc::clone(graph),
        }
    }
}

/// Undo/Redo-Manager mit Dual-Stack-Snapshotting.
///
/// Der Undo-Stapel hält an Index 0 den Basis-Zustand plus einen Eintrag pro
/// committeter Geste. Der Basis-Eintrag wird nie verdrängt; läuft der Stapel
/// über, fällt der älteste Gesten-Eintrag (Index 1) heraus.
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen History-Manager mit Basis-Snapshot und maximaler Tiefe.
    pub fn with_base(base: Snapshot, max_depth: usize) -> Self {
        let mut undo_stack = Vec::with_capacity(max_depth);
        undo_stack.push(base);
        Self {
            undo_stack,
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    /// Hängt einen Post-Commit-Snapshot an und verwirft den Redo-Stapel.
    pub fn push(&mut self, snapshot: Snapshot) {
        if self.undo_stack.len() >= self.max_depth && self.undo_stack.len() > 1 {
            // Basis an Index 0 bleibt, der älteste Gesten-Eintrag fällt.
            self.undo_stack.remove(1);
        }
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist (mehr als nur der Basis-Eintrag).
    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Legt den obersten Eintrag auf den Redo-Stapel und gibt den darunter
    /// liegenden Zustand zurück. No-op, solange nur die Basis übrig ist.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if self.undo_stack.len() <= 1 {
            return None;
        }
        let current = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        self.undo_stack.last().cloned()
    }

    /// Holt den obersten Redo-Eintrag zurück auf den Undo-Stapel.
    pub fn redo(&mut self) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(next.clone());
        Some(next)
    }

    /// Aktuelle Tiefe des Undo-Stapels (inkl. Basis).
    pub fn depth(&self) -> usize {
        self.undo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VertexFlags;
    use glam::Vec2;

    fn snapshot_with_vertex_count(count: usize) -> Snapshot {
        let mut graph = WallGraph::new();
        for i in 0..count {
            let f = i as f32;
            graph.create_vertex(Vec2::new(f * 20.0, 0.0), VertexFlags::empty());
        }
        Snapshot::of(&Arc::new(graph))
    }

    #[test]
    fn fresh_history_cannot_undo_or_redo() {
        let history = EditHistory::with_base(snapshot_with_vertex_count(0), 10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn push_enables_undo() {
        let mut history = EditHistory::with_base(snapshot_with_vertex_count(0), 10);
        history.push(snapshot_with_vertex_count(1));
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_yields_previous_snapshot() {
        let mut history = EditHistory::with_base(snapshot_with_vertex_count(0), 10);
        history.push(snapshot_with_vertex_count(1));
        history.push(snapshot_with_vertex_count(2));

        let restored = history.undo().expect("Undo vorhanden");
        assert_eq!(restored.graph.vertex_count(), 1);
        assert!(history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn undo_n_times_restores_base() {
        let base = snapshot_with_vertex_count(0);
        let mut history = EditHistory::with_base(base, 10);
        for i in 1..=4 {
            history.push(snapshot_with_vertex_count(i));
        }

        let mut last = None;
        while history.can_undo() {
            last = history.undo();
        }

        let last = last.expect("mindestens ein Undo");
        assert_eq!(*last.graph, WallGraph::new());
        assert!(!history.can_undo());
    }

    #[test]
    fn redo_restores_undone_snapshot() {
        let mut history = EditHistory::with_base(snapshot_with_vertex_count(0), 10);
        history.push(snapshot_with_vertex_count(3));

        let _restored = history.undo();
        let redone = history.redo().expect("Redo vorhanden");

        assert_eq!(redone.graph.vertex_count(), 3);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn push_clears_redo_stack() {
        let mut history = EditHistory::with_base(snapshot_with_vertex_count(0), 10);
        history.push(snapshot_with_vertex_count(1));
        let _restored = history.undo();
        assert!(history.can_redo());

        history.push(snapshot_with_vertex_count(7));
        assert!(!history.can_redo());
        assert!(history.redo().is_none());
    }

    #[test]
    fn capacity_evicts_oldest_gesture_but_never_base() {
        let mut history = EditHistory::with_base(snapshot_with_vertex_count(0), 3);
        for i in 1..=5 {
            history.push(snapshot_with_vertex_count(i));
        }
        assert_eq!(history.depth(), 3);

        let mut last = None;
        while history.can_undo() {
            last = history.undo();
        }

        // Nach Erschöpfung aller Undos liegt wieder die Basis an.
        assert_eq!(last.expect("Undo vorhanden").graph.vertex_count(), 0);
    }

    #[test]
    fn undo_on_base_only_is_noop() {
        let mut history = EditHistory::with_base(snapshot_with_vertex_count(2), 10);
        assert!(history.undo().is_none());
        assert_eq!(history.depth(), 1);
    }
}
