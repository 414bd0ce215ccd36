//! Handler für Vertex- und Wand-Drag.

use crate::app::mode::{AxisLock, Mode};
use crate::app::EditorState;
use crate::core::{AdjacencyIndex, VertexFlags, VertexId, WallFlags, WallId};
use anyhow::bail;
use glam::Vec2;

/// Startet einen Vertex-Drag und merkt sich die Start-Koordinate.
pub fn begin_vertex(state: &mut EditorState, vertex: VertexId) -> anyhow::Result<()> {
    if !matches!(state.mode, Mode::Idle) {
        return Ok(());
    }
    let Some(origin) = state.graph.vertex(vertex).map(|v| v.position) else {
        log::warn!("Drag auf nicht existierendem Vertex {vertex} ignoriert");
        return Ok(());
    };

    state
        .graph_mut()
        .set_vertex_flags(vertex, VertexFlags::DRAGGING);
    state.mode = Mode::DraggingVertex {
        vertex,
        origin,
        lock: AxisLock::default(),
    };
    log::info!("Drag von {vertex} gestartet");
    Ok(())
}

/// Startet einen Wand-Drag und merkt sich beide Endpunkt-Koordinaten.
pub fn begin_wall(state: &mut EditorState, wall: WallId) -> anyhow::Result<()> {
    if !matches!(state.mode, Mode::Idle) {
        return Ok(());
    }
    let Some((v1, v2)) = state.graph.wall(wall).map(|w| (w.v1, w.v2)) else {
        log::warn!("Drag auf nicht existierender Wand {wall} ignoriert");
        return Ok(());
    };
    let (Some(a), Some(b)) = (state.graph.vertex(v1), state.graph.vertex(v2)) else {
        bail!("Wand {wall} mit hängendem Endpunkt beim Drag-Start");
    };
    let (origin_a, origin_b) = (a.position, b.position);

    state.graph_mut().set_wall_flags(wall, WallFlags::DRAGGING);
    state.mode = Mode::DraggingWall {
        wall,
        origin_a,
        origin_b,
        lock: AxisLock::default(),
    };
    log::info!("Drag von {wall} gestartet");
    Ok(())
}

/// Berechnet die Position aus Start-Koordinate plus kumuliertem Delta neu —
/// nie inkrementell, damit sich kein Drift aufsummiert.
pub fn update(state: &mut EditorState, delta: Vec2, axis_modifier: bool) -> anyhow::Result<()> {
    let threshold = state.options.axis_lock_threshold;

    match state.mode {
        Mode::DraggingVertex {
            vertex,
            origin,
            mut lock,
        } => {
            if !state.graph.has_vertex(vertex) {
                bail!("Gezogener Vertex {vertex} fehlt beim Drag-Update");
            }
            let constrained = lock.constrain(delta, axis_modifier, threshold);
            let position = state.snap(origin + constrained);
            state.graph_mut().update_vertex_position(vertex, position);
            state.mode = Mode::DraggingVertex {
                vertex,
                origin,
                lock,
            };
        }
        Mode::DraggingWall {
            wall,
            origin_a,
            origin_b,
            mut lock,
        } => {
            let Some((v1, v2)) = state.graph.wall(wall).map(|w| (w.v1, w.v2)) else {
                bail!("Gezogene Wand {wall} fehlt beim Drag-Update");
            };
            let constrained = lock.constrain(delta, axis_modifier, threshold);
            let pos_a = state.snap(origin_a + constrained);
            let pos_b = state.snap(origin_b + constrained);
            let graph = state.graph_mut();
            graph.update_vertex_position(v1, pos_a);
            graph.update_vertex_position(v2, pos_b);
            state.mode = Mode::DraggingWall {
                wall,
                origin_a,
                origin_b,
                lock,
            };
        }
        _ => {}
    }
    Ok(())
}

/// Committet den Drag: Flags löschen, Merges an allen bewegten Entities,
/// History-Eintrag.
pub fn confirm(state: &mut EditorState) -> anyhow::Result<()> {
    match state.mode {
        Mode::DraggingVertex { vertex, .. } => {
            if !state.graph.has_vertex(vertex) {
                bail!("Gezogener Vertex {vertex} fehlt beim Drag-Commit");
            }
            let graph = state.graph_mut();
            graph.clear_vertex_flags(vertex, VertexFlags::DRAGGING);
            graph.merge_vertices_at_vertex(vertex);
            // Teilten Ziel und Duplikat einen Nachbarn, liegen nach dem
            // Umhängen zwei Wände über demselben Paar.
            let incident: Vec<WallId> = AdjacencyIndex::build(graph).walls_at(vertex).to_vec();
            for wall in incident {
                if graph.has_wall(wall) {
                    graph.merge_walls_at_wall(wall);
                }
            }
            log::info!("Drag von {vertex} committet");
        }
        Mode::DraggingWall { wall, .. } => {
            let Some((v1, v2)) = state.graph.wall(wall).map(|w| (w.v1, w.v2)) else {
                bail!("Gezogene Wand {wall} fehlt beim Drag-Commit");
            };
            let graph = state.graph_mut();
            graph.clear_wall_flags(wall, WallFlags::DRAGGING);
            graph.merge_vertices_at_vertex(v1);
            // v2 kann vom ersten Merge verschluckt worden sein, wenn beide
            // Endpunkte auf denselben Punkt gezogen wurden.
            if graph.has_vertex(v2) {
                graph.merge_vertices_at_vertex(v2);
            }
            if graph.has_wall(wall) {
                graph.merge_walls_at_wall(wall);
            }
            log::info!("Drag von {wall} committet");
        }
        _ => return Ok(()),
    }

    state.commit_history();
    state.mode = Mode::Idle;
    Ok(())
}

/// Bricht den Drag ab: Start-Koordinaten wiederherstellen, kein Merge,
/// kein History-Eintrag.
pub fn cancel(state: &mut EditorState) -> anyhow::Result<()> {
    match state.mode {
        Mode::DraggingVertex { vertex, origin, .. } => {
            let graph = state.graph_mut();
            graph.update_vertex_position(vertex, origin);
            graph.clear_vertex_flags(vertex, VertexFlags::DRAGGING);
            log::info!("Drag von {vertex} abgebrochen");
        }
        Mode::DraggingWall {
            wall,
            origin_a,
            origin_b,
            ..
        } => {
            if let Some((v1, v2)) = state.graph.wall(wall).map(|w| (w.v1, w.v2)) {
                let graph = state.graph_mut();
                graph.update_vertex_position(v1, origin_a);
                graph.update_vertex_position(v2, origin_b);
                graph.clear_wall_flags(wall, WallFlags::DRAGGING);
            }
            log::info!("Drag von {wall} abgebrochen");
        }
        _ => return Ok(()),
    }

    state.mode = Mode::Idle;
    Ok(())
}
