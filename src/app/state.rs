//! Editor-Zustand: Graph, Modus, Pan, History, Optionen.

use crate::app::history::{EditHistory, Snapshot};
use crate::app::mode::Mode;
use crate::app::CommandLog;
use crate::core::{snap_to_grid, WallGraph};
use crate::shared::EditorOptions;
use glam::Vec2;
use std::sync::Arc;

/// Pan-Offset der Ansicht, geklemmt auf die konfigurierten Grenzen.
///
/// Reiner View-Zustand — berührt den Graphen nie und landet nicht in der
/// History.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanState {
    /// Aktueller Offset in Dokument-Koordinaten
    pub offset: Vec2,
}

impl PanState {
    /// Verschiebt den Offset um ein Delta und klemmt auf `±limit` pro Achse.
    pub fn pan_by(&mut self, delta: Vec2, limit: f32) {
        self.offset = (self.offset + delta).clamp(Vec2::splat(-limit), Vec2::splat(limit));
    }
}

/// Hauptzustand einer Editier-Session.
pub struct EditorState {
    /// Der Wand-Graph (Arc für Copy-on-Write-Snapshots)
    pub graph: Arc<WallGraph>,
    /// Aktiver Gesten-Modus (einzige Quelle der Wahrheit)
    pub mode: Mode,
    /// Pan-Zustand der Ansicht
    pub pan: PanState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Raster, Schwellwerte, Grenzen)
    pub options: EditorOptions,
}

impl EditorState {
    /// Erstellt eine neue Session mit leerem Graphen als Basis-Snapshot.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt eine neue Session mit expliziten Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let graph = Arc::new(WallGraph::new());
        let history = EditHistory::with_base(Snapshot::of(&graph), options.history_depth);
        let command_log = CommandLog::with_limit(options.command_log_limit);
        Self {
            graph,
            mode: Mode::Idle,
            pan: PanState::default(),
            command_log,
            history,
            options,
        }
    }

    /// Mutierender Zugriff auf den Graphen (Copy-on-Write).
    ///
    /// Teilt der Graph sich den Wert noch mit einem History-Snapshot,
    /// klont `Arc::make_mut` hier genau einmal.
    pub fn graph_mut(&mut self) -> &mut WallGraph {
        Arc::make_mut(&mut self.graph)
    }

    /// Rastet einen Punkt auf das konfigurierte Raster.
    pub fn snap(&self, point: Vec2) -> Vec2 {
        snap_to_grid(point, self.options.grid_size)
    }

    /// Committet den aktuellen Graph-Zustand als History-Eintrag.
    pub fn commit_history(&mut self) {
        self.history.push(Snapshot::of(&self.graph));
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
