//! Handler für die Wand-Teilung (verzweigt aus der Vertex-Platzierung).

use crate::app::mode::Mode;
use crate::app::EditorState;
use crate::core::{colinear_point, AdjacencyIndex, VertexFlags, WallFlags, WallId};
use anyhow::bail;
use glam::Vec2;

/// Endpunkt-Positionen einer Wand; fehlende Endpunkte sind ein Defekt,
/// weil der Graph im Ruhezustand keine hängenden Kanten kennt.
fn wall_segment(state: &EditorState, wall: WallId) -> anyhow::Result<(Vec2, Vec2)> {
    let Some(wall) = state.graph.wall(wall) else {
        bail!("Ziel-Wand {wall} fehlt im Graphen");
    };
    let (v1, v2) = (wall.v1, wall.v2);
    match (state.graph.vertex(v1), state.graph.vertex(v2)) {
        (Some(a), Some(b)) => Ok((a.position, b.position)),
        _ => bail!("Wand mit hängendem Endpunkt ({v1}, {v2})"),
    }
}

/// Startet die Teilung: der Platzier-Vertex wird zum Split-Vertex auf der
/// gehoverten Wand, zwei temporäre Schenkel verbinden ihre Endpunkte mit ihm.
pub fn begin(state: &mut EditorState, target: WallId, point: Vec2) -> anyhow::Result<()> {
    let Mode::PlacingVertex { vertex } = state.mode else {
        return Ok(());
    };
    if !state.graph.has_vertex(vertex) {
        bail!("Platzier-Vertex {vertex} fehlt beim Teilungs-Start");
    }
    // Veralteter Hover nach einer Mutation ist kein Defekt.
    let Some((end_a, end_b)) = state.graph.wall(target).map(|w| (w.v1, w.v2)) else {
        log::warn!("Teilungs-Start auf nicht existierender Wand {target} ignoriert");
        return Ok(());
    };

    let (a, b) = wall_segment(state, target)?;
    let split_pos = colinear_point(a, b, state.snap(point));

    let graph = state.graph_mut();
    graph.clear_vertex_flags(vertex, VertexFlags::PLACING);
    graph.set_vertex_flags(vertex, VertexFlags::SPLITTING);
    graph.update_vertex_position(vertex, split_pos);
    graph.set_wall_flags(target, WallFlags::SPLIT_TARGET);

    let Some(leg_a) = graph.create_wall(end_a, vertex, WallFlags::SPLITTING)? else {
        bail!("Teilungs-Schenkel an {end_a} degeneriert");
    };
    let Some(leg_b) = graph.create_wall(end_b, vertex, WallFlags::SPLITTING)? else {
        bail!("Teilungs-Schenkel an {end_b} degeneriert");
    };

    state.mode = Mode::SplittingWall {
        vertex,
        target,
        leg_a,
        leg_b,
    };
    log::info!("Teilung von {target} gestartet, Split-Vertex {vertex}");
    Ok(())
}

/// Führt den Split-Vertex nach: auf der Ziel-Wand projiziert, über einer
/// anderen Wand wird umgezielt, über leerem Raum frei gerastert.
pub fn update(
    state: &mut EditorState,
    hover_wall: Option<WallId>,
    point: Vec2,
) -> anyhow::Result<()> {
    let Mode::SplittingWall {
        vertex,
        target,
        leg_a,
        leg_b,
    } = state.mode
    else {
        return Ok(());
    };
    if !state.graph.has_vertex(vertex) {
        bail!("Split-Vertex {vertex} fehlt beim Teilungs-Update");
    }

    let snapped = state.snap(point);

    let position = match hover_wall {
        // Die eigenen Schenkel liegen ständig unter dem Zeiger; sie zählen
        // wie die Ziel-Wand selbst als "auf dem Ziel".
        Some(hovered)
            if hovered != target
                && hovered != leg_a
                && hovered != leg_b
                && state.graph.has_wall(hovered) =>
        {
            retarget(state, hovered, target, leg_a, leg_b)?;
            let (a, b) = wall_segment(state, hovered)?;
            colinear_point(a, b, snapped)
        }
        Some(_) => {
            let (a, b) = wall_segment(state, target)?;
            colinear_point(a, b, snapped)
        }
        None => snapped,
    };

    state.graph_mut().update_vertex_position(vertex, position);
    Ok(())
}

/// Wechselt das Teilungs-Ziel: SPLIT_TARGET umsetzen, Schenkel-Enden auf die
/// Endpunkte der neuen Wand umhängen.
fn retarget(
    state: &mut EditorState,
    new_target: WallId,
    old_target: WallId,
    leg_a: WallId,
    leg_b: WallId,
) -> anyhow::Result<()> {
    let Mode::SplittingWall { vertex, .. } = state.mode else {
        return Ok(());
    };
    let Some(new_wall) = state.graph.wall(new_target).map(|w| (w.v1, w.v2)) else {
        bail!("Neues Teilungs-Ziel {new_target} fehlt");
    };

    let Some(leg) = state.graph.wall(leg_a) else {
        bail!("Teilungs-Schenkel {leg_a} fehlt beim Zielwechsel");
    };
    let old_a = if leg.v1 == vertex { leg.v2 } else { leg.v1 };
    let Some(leg) = state.graph.wall(leg_b) else {
        bail!("Teilungs-Schenkel {leg_b} fehlt beim Zielwechsel");
    };
    let old_b = if leg.v1 == vertex { leg.v2 } else { leg.v1 };

    let graph = state.graph_mut();
    graph.clear_wall_flags(old_target, WallFlags::SPLIT_TARGET);
    graph.set_wall_flags(new_target, WallFlags::SPLIT_TARGET);
    graph.repoint_wall(leg_a, old_a, new_wall.0)?;
    graph.repoint_wall(leg_b, old_b, new_wall.1)?;

    state.mode = Mode::SplittingWall {
        vertex,
        target: new_target,
        leg_a,
        leg_b,
    };
    log::info!("Teilungs-Ziel gewechselt: {old_target} → {new_target}");
    Ok(())
}

/// Committet die Teilung: Merges, Ziel-Wand löschen, Kette läuft am
/// Split-Vertex weiter.
pub fn confirm(state: &mut EditorState) -> anyhow::Result<()> {
    let Mode::SplittingWall {
        vertex,
        target,
        leg_a,
        leg_b,
    } = state.mode
    else {
        return Ok(());
    };
    if !state.graph.has_vertex(vertex) {
        bail!("Split-Vertex {vertex} fehlt beim Teilungs-Commit");
    }

    let graph = state.graph_mut();
    graph.clear_vertex_flags(vertex, VertexFlags::SPLITTING);
    graph.merge_vertices_at_vertex(vertex);
    for leg in [leg_a, leg_b] {
        // Ein Schenkel kann durch den Vertex-Merge bereits zur
        // Selbst-Referenz kollabiert sein.
        if graph.has_wall(leg) {
            graph.clear_wall_flags(leg, WallFlags::SPLITTING);
            graph.merge_walls_at_wall(leg);
        }
    }
    if graph.has_wall(target) {
        // Beide Endpunkte tragen noch ihre Schenkel, es kaskadiert nichts.
        let adjacency = AdjacencyIndex::build(graph);
        graph.delete_wall(target, &adjacency);
    }
    state.commit_history();

    state.mode = Mode::PlacingWall {
        tail: vertex,
        pending: None,
    };
    log::info!("Teilung committet, Kette läuft an {vertex} weiter");
    Ok(())
}

/// Bricht die Teilung ab: Split-Vertex löschen (kaskadiert auf die Schenkel),
/// Ziel-Flag zurücknehmen.
pub fn cancel(state: &mut EditorState) -> anyhow::Result<()> {
    let Mode::SplittingWall { vertex, target, .. } = state.mode else {
        return Ok(());
    };

    let graph = state.graph_mut();
    graph.delete_vertex(vertex);
    graph.clear_wall_flags(target, WallFlags::SPLIT_TARGET);

    state.mode = Mode::Idle;
    log::info!("Teilung abgebrochen, {vertex} verworfen");
    Ok(())
}
