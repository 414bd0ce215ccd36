//! Handler für die Platzier-Kette (Vertex → Wand → Wand → …).

use crate::app::mode::{Mode, PendingWall};
use crate::app::EditorState;
use crate::core::{VertexFlags, WallFlags};
use anyhow::bail;
use glam::Vec2;

/// Startet die Platzier-Kette mit einem temporären Vertex am Punkt.
pub fn begin_vertex(state: &mut EditorState, point: Vec2) -> anyhow::Result<()> {
    if !matches!(state.mode, Mode::Idle) {
        return Ok(());
    }

    let snapped = state.snap(point);
    let Some(vertex) = state.graph_mut().create_vertex(snapped, VertexFlags::PLACING) else {
        return Ok(());
    };

    state.mode = Mode::PlacingVertex { vertex };
    log::info!("Platzieren gestartet: {vertex} an {snapped:?}");
    Ok(())
}

/// Führt den temporären Platzier-Vertex dem Zeiger nach.
pub fn update_vertex(state: &mut EditorState, point: Vec2) -> anyhow::Result<()> {
    let Mode::PlacingVertex { vertex } = state.mode else {
        return Ok(());
    };
    if !state.graph.has_vertex(vertex) {
        bail!("Platzier-Vertex {vertex} fehlt im Graphen");
    }

    let snapped = state.snap(point);
    state.graph_mut().update_vertex_position(vertex, snapped);
    Ok(())
}

/// Committet den Platzier-Vertex: Merge, Flag löschen, wird Tail der Kette.
pub fn confirm_vertex(state: &mut EditorState) -> anyhow::Result<()> {
    let Mode::PlacingVertex { vertex } = state.mode else {
        return Ok(());
    };
    if !state.graph.has_vertex(vertex) {
        bail!("Platzier-Vertex {vertex} fehlt beim Commit");
    }

    let graph = state.graph_mut();
    graph.clear_vertex_flags(vertex, VertexFlags::PLACING);
    graph.merge_vertices_at_vertex(vertex);
    state.commit_history();

    state.mode = Mode::PlacingWall {
        tail: vertex,
        pending: None,
    };
    log::info!("Vertex {vertex} committet, Wand-Kette beginnt");
    Ok(())
}

/// Führt den Wand-Kopf dem Zeiger nach; erzeugt Kopf + Wand beim ersten Move.
pub fn update_wall(state: &mut EditorState, point: Vec2) -> anyhow::Result<()> {
    let Mode::PlacingWall { tail, pending } = state.mode else {
        return Ok(());
    };
    let snapped = state.snap(point);

    match pending {
        None => {
            if !state.graph.has_vertex(tail) {
                bail!("Tail-Vertex {tail} der Wand-Kette fehlt");
            }
            let graph = state.graph_mut();
            let Some(head) = graph.create_vertex(snapped, VertexFlags::PLACING) else {
                return Ok(());
            };
            // Tail und Kopf sind verschiedene IDs, die Wand ist nie degeneriert.
            let Some(wall) = graph.create_wall(tail, head, WallFlags::PLACING)? else {
                return Ok(());
            };
            state.mode = Mode::PlacingWall {
                tail,
                pending: Some(PendingWall { head, wall }),
            };
        }
        Some(pending) => {
            if !state.graph.has_vertex(pending.head) {
                bail!("Kopf-Vertex {} der Wand-Kette fehlt", pending.head);
            }
            state.graph_mut().update_vertex_position(pending.head, snapped);
        }
    }
    Ok(())
}

/// Committet die laufende Wand: Merges, Kopf wird neuer Tail, Kette läuft weiter.
///
/// Ohne ausstehende Wand (noch kein Move) ist der Commit ein No-op.
pub fn confirm_wall(state: &mut EditorState) -> anyhow::Result<()> {
    let Mode::PlacingWall { pending, .. } = state.mode else {
        return Ok(());
    };
    let Some(pending) = pending else {
        return Ok(());
    };
    if !state.graph.has_vertex(pending.head) {
        bail!("Kopf-Vertex {} fehlt beim Wand-Commit", pending.head);
    }

    let graph = state.graph_mut();
    graph.clear_vertex_flags(pending.head, VertexFlags::PLACING);
    graph.clear_wall_flags(pending.wall, WallFlags::PLACING);
    // Landet der Kopf auf dem Punkt des Tails, verschluckt der Vertex-Merge
    // die Wand als Selbst-Referenz — der Commit rückt dann nur den Tail vor.
    graph.merge_vertices_at_vertex(pending.head);
    if graph.has_wall(pending.wall) {
        graph.merge_walls_at_wall(pending.wall);
    }
    state.commit_history();

    state.mode = Mode::PlacingWall {
        tail: pending.head,
        pending: None,
    };
    log::info!("Wand committet, neuer Tail: {}", pending.head);
    Ok(())
}

/// Bricht die Platzier-Kette ab und verwirft alle temporären Entities.
pub fn cancel(state: &mut EditorState) -> anyhow::Result<()> {
    match state.mode {
        Mode::PlacingVertex { vertex } => {
            state.graph_mut().delete_vertex(vertex);
            log::info!("Platzieren abgebrochen, {vertex} verworfen");
        }
        Mode::PlacingWall {
            pending: Some(pending),
            ..
        } => {
            // Löscht den Kopf und kaskadiert auf die ausstehende Wand.
            state.graph_mut().delete_vertex(pending.head);
            log::info!("Wand-Kette abgebrochen, {} verworfen", pending.head);
        }
        Mode::PlacingWall { pending: None, .. } => {
            log::debug!("Wand-Kette ohne ausstehende Wand beendet");
        }
        _ => return Ok(()),
    }

    state.mode = Mode::Idle;
    Ok(())
}
