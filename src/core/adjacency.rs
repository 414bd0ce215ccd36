//! Abgeleiteter, read-only Adjazenz-Index über den aktuellen Graphen.

use super::{VertexId, WallGraph, WallId};
use glam::Vec2;
use std::collections::HashMap;

/// Schlüssel für exakten Positions-Vergleich.
///
/// Koinzidenz ist exakte Gleichheit bereits gerasteter Koordinaten, nie ein
/// Distanz-Schwellwert. Der Vergleich läuft über das Bitmuster; `-0.0` wird
/// auf `0.0` normalisiert, damit beide auf denselben Rasterpunkt fallen.
fn point_key(point: Vec2) -> (u32, u32) {
    let normalize = |v: f32| if v == 0.0 { 0.0_f32 } else { v };
    (normalize(point.x).to_bits(), normalize(point.y).to_bits())
}

/// Reine Lookup-Struktur, abgeleitet aus dem Graph-Zustand.
///
/// Muss vor jedem Gesten-Schritt, der sie abfragt, frisch aufgebaut werden —
/// nie gegen einen veralteten Graphen abfragen, nie über eine Mutation hinweg
/// cachen.
#[derive(Debug, Default)]
pub struct AdjacencyIndex {
    /// Vertex-ID → IDs aller Wände, die ihn berühren
    walls_at_vertex: HashMap<VertexId, Vec<WallId>>,
    /// Exakte Position → IDs aller Vertices an diesem Punkt
    vertices_at_point: HashMap<(u32, u32), Vec<VertexId>>,
    /// Ungeordnetes Endpunkt-Paar → IDs aller Wände, die es aufspannen
    walls_between: HashMap<(VertexId, VertexId), Vec<WallId>>,
}

impl AdjacencyIndex {
    /// Baut den Index aus dem aktuellen Graph-Zustand auf.
    pub fn build(graph: &WallGraph) -> Self {
        let mut index = Self::default();

        for vertex in graph.vertices_iter() {
            index
                .vertices_at_point
                .entry(point_key(vertex.position))
                .or_default()
                .push(vertex.id);
        }

        for wall in graph.walls_iter() {
            index
                .walls_at_vertex
                .entry(wall.v1)
                .or_default()
                .push(wall.id);
            index
                .walls_at_vertex
                .entry(wall.v2)
                .or_default()
                .push(wall.id);
            index
                .walls_between
                .entry(wall.endpoint_pair())
                .or_default()
                .push(wall.id);
        }

        index
    }

    /// Alle Wände, die den Vertex berühren.
    pub fn walls_at(&self, vertex: VertexId) -> &[WallId] {
        self.walls_at_vertex
            .get(&vertex)
            .map_or(&[], Vec::as_slice)
    }

    /// Alle Vertices an exakt dieser Position.
    pub fn vertices_at(&self, point: Vec2) -> &[VertexId] {
        self.vertices_at_point
            .get(&point_key(point))
            .map_or(&[], Vec::as_slice)
    }

    /// Alle Wände über dem ungeordneten Endpunkt-Paar.
    pub fn walls_between(&self, a: VertexId, b: VertexId) -> &[WallId] {
        let pair = if a <= b { (a, b) } else { (b, a) };
        self.walls_between.get(&pair).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{VertexFlags, WallFlags};

    #[test]
    fn walls_at_lists_incident_walls() {
        let mut graph = WallGraph::new();
        let a = graph.create_vertex(Vec2::ZERO, VertexFlags::empty()).unwrap();
        let b = graph
            .create_vertex(Vec2::new(100.0, 0.0), VertexFlags::empty())
            .unwrap();
        let c = graph
            .create_vertex(Vec2::new(0.0, 100.0), VertexFlags::empty())
            .unwrap();
        let ab = graph.create_wall(a, b, WallFlags::empty()).unwrap().unwrap();
        let ac = graph.create_wall(a, c, WallFlags::empty()).unwrap().unwrap();

        let index = AdjacencyIndex::build(&graph);
        assert_eq!(index.walls_at(a), [ab, ac]);
        assert_eq!(index.walls_at(b), [ab]);
        assert_eq!(index.walls_at(c), [ac]);
    }

    #[test]
    fn vertices_at_groups_exact_positions() {
        let mut graph = WallGraph::new();
        let a = graph
            .create_vertex(Vec2::new(40.0, 40.0), VertexFlags::empty())
            .unwrap();
        let b = graph
            .create_vertex(Vec2::new(40.0, 40.0), VertexFlags::empty())
            .unwrap();
        let c = graph
            .create_vertex(Vec2::new(40.0, 60.0), VertexFlags::empty())
            .unwrap();

        let index = AdjacencyIndex::build(&graph);
        assert_eq!(index.vertices_at(Vec2::new(40.0, 40.0)), [a, b]);
        assert_eq!(index.vertices_at(Vec2::new(40.0, 60.0)), [c]);
        assert!(index.vertices_at(Vec2::new(0.0, 0.0)).is_empty());
    }

    #[test]
    fn vertices_at_treats_negative_zero_as_zero() {
        let mut graph = WallGraph::new();
        let a = graph
            .create_vertex(Vec2::new(-0.0, 0.0), VertexFlags::empty())
            .unwrap();

        let index = AdjacencyIndex::build(&graph);
        assert_eq!(index.vertices_at(Vec2::new(0.0, -0.0)), [a]);
    }

    #[test]
    fn walls_between_is_unordered() {
        let mut graph = WallGraph::new();
        let a = graph.create_vertex(Vec2::ZERO, VertexFlags::empty()).unwrap();
        let b = graph
            .create_vertex(Vec2::new(100.0, 0.0), VertexFlags::empty())
            .unwrap();
        let ab = graph.create_wall(a, b, WallFlags::empty()).unwrap().unwrap();
        let ba = graph.create_wall(b, a, WallFlags::empty()).unwrap().unwrap();

        let index = AdjacencyIndex::build(&graph);
        assert_eq!(index.walls_between(a, b), [ab, ba]);
        assert_eq!(index.walls_between(b, a), [ab, ba]);
    }
}
