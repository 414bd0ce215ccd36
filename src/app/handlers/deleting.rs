//! Handler für den Entity-Lösch-Modus (Modifier gehalten, Klick löscht).

use crate::app::events::EntityRef;
use crate::app::mode::Mode;
use crate::app::EditorState;
use crate::core::AdjacencyIndex;

/// Betritt den Lösch-Modus, solange keine Geste läuft.
pub fn enter(state: &mut EditorState) -> anyhow::Result<()> {
    if !matches!(state.mode, Mode::Idle) {
        return Ok(());
    }
    state.mode = Mode::EntityDelete;
    log::debug!("Lösch-Modus betreten");
    Ok(())
}

/// Verlässt den Lösch-Modus (Modifier losgelassen).
pub fn exit(state: &mut EditorState) -> anyhow::Result<()> {
    if !matches!(state.mode, Mode::EntityDelete) {
        return Ok(());
    }
    state.mode = Mode::Idle;
    log::debug!("Lösch-Modus verlassen");
    Ok(())
}

/// Löscht die getroffene Entity sofort (kaskadierend) und committet History.
pub fn delete_at(state: &mut EditorState, target: EntityRef) -> anyhow::Result<()> {
    if !matches!(state.mode, Mode::EntityDelete) {
        return Ok(());
    }

    match target {
        EntityRef::Vertex(vertex) => {
            if state.graph_mut().delete_vertex(vertex).is_none() {
                log::warn!("Löschen von nicht existierendem Vertex {vertex} ignoriert");
                return Ok(());
            }
            log::info!("Vertex {vertex} gelöscht");
        }
        EntityRef::Wall(wall) => {
            let adjacency = AdjacencyIndex::build(&state.graph);
            if !state.graph_mut().delete_wall(wall, &adjacency) {
                log::warn!("Löschen von nicht existierender Wand {wall} ignoriert");
                return Ok(());
            }
            log::info!("Wand {wall} gelöscht");
        }
    }

    state.commit_history();
    Ok(())
}
