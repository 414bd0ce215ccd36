//! Handler für Vertex-/Wand-Selektion und Selektion-Operationen.

use crate::app::mode::Mode;
use crate::app::EditorState;
use crate::core::{AdjacencyIndex, VertexFlags, VertexId, WallFlags, WallId};
use anyhow::bail;
use glam::Vec2;

/// Entfernt das SELECTED-Flag der aktuellen Selektion, falls vorhanden.
fn clear_selected_flag(state: &mut EditorState) {
    match state.mode {
        Mode::SelectingVertex { vertex } => {
            state
                .graph_mut()
                .clear_vertex_flags(vertex, VertexFlags::SELECTED);
        }
        Mode::SelectingWall { wall } => {
            state.graph_mut().clear_wall_flags(wall, WallFlags::SELECTED);
        }
        _ => {}
    }
}

/// Selektiert einen Vertex; eine bestehende Selektion wird gewechselt.
pub fn select_vertex(state: &mut EditorState, vertex: VertexId) -> anyhow::Result<()> {
    if !matches!(
        state.mode,
        Mode::Idle | Mode::SelectingVertex { .. } | Mode::SelectingWall { .. }
    ) {
        return Ok(());
    }
    if !state.graph.has_vertex(vertex) {
        log::warn!("Selektion von nicht existierendem Vertex {vertex} ignoriert");
        return Ok(());
    }

    clear_selected_flag(state);
    state.graph_mut().set_vertex_flags(vertex, VertexFlags::SELECTED);
    state.mode = Mode::SelectingVertex { vertex };
    log::info!("Vertex {vertex} selektiert");
    Ok(())
}

/// Selektiert eine Wand; eine bestehende Selektion wird gewechselt.
pub fn select_wall(state: &mut EditorState, wall: WallId) -> anyhow::Result<()> {
    if !matches!(
        state.mode,
        Mode::Idle | Mode::SelectingVertex { .. } | Mode::SelectingWall { .. }
    ) {
        return Ok(());
    }
    if !state.graph.has_wall(wall) {
        log::warn!("Selektion von nicht existierender Wand {wall} ignoriert");
        return Ok(());
    }

    clear_selected_flag(state);
    state.graph_mut().set_wall_flags(wall, WallFlags::SELECTED);
    state.mode = Mode::SelectingWall { wall };
    log::info!("Wand {wall} selektiert");
    Ok(())
}

/// Verschiebt die Selektion um ein Delta und committet einen History-Eintrag.
///
/// Bewusst ohne Merge: Pfeiltasten-Verschieben vereinigt nie.
pub fn nudge(state: &mut EditorState, delta: Vec2) -> anyhow::Result<()> {
    match state.mode {
        Mode::SelectingVertex { vertex } => {
            let Some(position) = state.graph.vertex(vertex).map(|v| v.position) else {
                bail!("Selektierter Vertex {vertex} fehlt beim Verschieben");
            };
            state
                .graph_mut()
                .update_vertex_position(vertex, position + delta);
        }
        Mode::SelectingWall { wall } => {
            let Some((v1, v2)) = state.graph.wall(wall).map(|w| (w.v1, w.v2)) else {
                bail!("Selektierte Wand {wall} fehlt beim Verschieben");
            };
            // v1 != v2 ist Invariante, beide Endpunkte bewegen sich genau einmal.
            for vertex in [v1, v2] {
                let Some(position) = state.graph.vertex(vertex).map(|v| v.position) else {
                    bail!("Wand-Endpunkt {vertex} fehlt beim Verschieben");
                };
                state
                    .graph_mut()
                    .update_vertex_position(vertex, position + delta);
            }
        }
        _ => return Ok(()),
    }

    state.commit_history();
    Ok(())
}

/// Löscht die Selektion kaskadierend und kehrt zu Idle zurück.
pub fn delete(state: &mut EditorState) -> anyhow::Result<()> {
    match state.mode {
        Mode::SelectingVertex { vertex } => {
            if state.graph_mut().delete_vertex(vertex).is_none() {
                bail!("Selektierter Vertex {vertex} fehlt beim Löschen");
            }
            log::info!("Selektierter Vertex {vertex} gelöscht");
        }
        Mode::SelectingWall { wall } => {
            let adjacency = AdjacencyIndex::build(&state.graph);
            if !state.graph_mut().delete_wall(wall, &adjacency) {
                bail!("Selektierte Wand {wall} fehlt beim Löschen");
            }
            log::info!("Selektierte Wand {wall} gelöscht");
        }
        _ => return Ok(()),
    }

    state.commit_history();
    state.mode = Mode::Idle;
    Ok(())
}

/// Hebt die Selektion auf und kehrt zu Idle zurück.
pub fn clear(state: &mut EditorState) -> anyhow::Result<()> {
    if !matches!(
        state.mode,
        Mode::SelectingVertex { .. } | Mode::SelectingWall { .. }
    ) {
        return Ok(());
    }

    clear_selected_flag(state);
    state.mode = Mode::Idle;
    log::debug!("Selektion aufgehoben");
    Ok(())
}
