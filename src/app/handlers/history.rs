//! Handler für Undo/Redo-Operationen.

use crate::app::mode::Mode;
use crate::app::EditorState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
///
/// Stellt den kompletten Snapshot wieder her; der Modus fällt auf Idle
/// zurück, weil gestenlokale Referenzen in den restaurierten Zustand zeigen
/// könnten, den es nicht mehr gibt.
pub fn undo(state: &mut EditorState) {
    if let Some(snapshot) = state.history.undo() {
        state.graph = snapshot.graph;
        state.mode = Mode::Idle;
        log::info!("Undo ausgeführt");
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut EditorState) {
    if let Some(snapshot) = state.history.redo() {
        state.graph = snapshot.graph;
        state.mode = Mode::Idle;
        log::info!("Redo ausgeführt");
    } else {
        log::debug!("Redo: nichts zu tun");
    }
}
