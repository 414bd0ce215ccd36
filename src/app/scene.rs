//! Read-only Szene für die (externe) Render-Schicht.

use super::mode::ModeKind;
use super::EditorState;
use crate::core::WallGraph;
use glam::Vec2;
use std::sync::Arc;

/// Unveränderliche Sicht auf den Editor-Zustand.
///
/// Der Graph wandert als Arc-Klon hinein — die Szene bleibt gültig, auch
/// wenn die Session danach weiter mutiert (Copy-on-Write).
pub struct EditorScene {
    /// Graph-Zustand inklusive transienter Flags
    pub graph: Arc<WallGraph>,
    /// Aktive Modus-Art
    pub mode: ModeKind,
    /// Pan-Offset der Ansicht
    pub pan_offset: Vec2,
    /// Ob ein Undo-Schritt verfügbar ist
    pub can_undo: bool,
    /// Ob ein Redo-Schritt verfügbar ist
    pub can_redo: bool,
}

/// Baut die Szene aus dem aktuellen Zustand.
pub fn build(state: &EditorState) -> EditorScene {
    EditorScene {
        graph: Arc::clone(&state.graph),
        mode: state.mode.kind(),
        pan_offset: state.pan.offset,
        can_undo: state.can_undo(),
        can_redo: state.can_redo(),
    }
}
