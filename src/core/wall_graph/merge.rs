//! Merge-Engine: vereinigt koinzidente Vertices und kollabiert Doppel-Wände.

use super::WallGraph;
use crate::core::{AdjacencyIndex, VertexId, WallId};

impl WallGraph {
    /// Faltet alle *anderen* Vertices an der Position des Ziel-Vertex in
    /// diesen hinein.
    ///
    /// Für jedes Duplikat werden die berührenden Wände auf den Ziel-Vertex
    /// umgehängt, danach wird das Duplikat gelöscht. Wände, die durch das
    /// Umhängen selbstreferenziell würden, werden verworfen. Die Identität
    /// des Ziel-Vertex gewinnt immer.
    ///
    /// Gibt die Anzahl der vereinigten Duplikate zurück; fehlendes Ziel ist
    /// ein No-op.
    pub fn merge_vertices_at_vertex(&mut self, target: VertexId) -> usize {
        let Some(target_vertex) = self.vertex(target) else {
            return 0;
        };
        let position = target_vertex.position;

        let adjacency = AdjacencyIndex::build(self);
        let duplicates: Vec<VertexId> = adjacency
            .vertices_at(position)
            .iter()
            .copied()
            .filter(|&id| id != target)
            .collect();

        for &duplicate in &duplicates {
            for wall_id in adjacency.walls_at(duplicate) {
                // Kann bereits als Selbst-Referenz eines früheren Duplikats
                // verworfen worden sein.
                let Some(wall) = self.walls.get_mut(wall_id) else {
                    continue;
                };

                if wall.v1 == duplicate {
                    wall.v1 = target;
                }
                if wall.v2 == duplicate {
                    wall.v2 = target;
                }

                // Selbst-Referenz nach dem Umhängen → verwerfen
                if wall.v1 == wall.v2 {
                    self.walls.shift_remove(wall_id);
                    log::debug!("Selbstreferenzielle Wand {wall_id} nach Merge verworfen");
                }
            }

            self.vertices.shift_remove(&duplicate);
        }

        if !duplicates.is_empty() {
            log::info!(
                "{} Vertex-Duplikat(e) an {position:?} in {target} vereinigt",
                duplicates.len()
            );
        }

        duplicates.len()
    }

    /// Löscht alle *anderen* Wände über dem Endpunkt-Paar der Ziel-Wand.
    ///
    /// Die Duplikate gehen über [`WallGraph::delete_wall`], damit dabei
    /// verwaiste Endpunkte mit bereinigt werden. Gibt die Anzahl der
    /// gelöschten Doppel-Wände zurück; fehlendes Ziel ist ein No-op.
    pub fn merge_walls_at_wall(&mut self, target: WallId) -> usize {
        let Some(target_wall) = self.wall(target) else {
            return 0;
        };
        let (a, b) = (target_wall.v1, target_wall.v2);

        let duplicates: Vec<WallId> = AdjacencyIndex::build(self)
            .walls_between(a, b)
            .iter()
            .copied()
            .filter(|&id| id != target)
            .collect();

        let mut removed = 0;
        for duplicate in &duplicates {
            // Index pro Löschung frisch aufbauen, nie über eine Mutation
            // hinweg abfragen.
            let adjacency = AdjacencyIndex::build(self);
            if self.delete_wall(*duplicate, &adjacency) {
                removed += 1;
            }
        }

        if removed > 0 {
            log::info!("{removed} Doppel-Wand/Wände an {target} kollabiert");
        }

        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{VertexFlags, WallFlags};
    use glam::Vec2;

    #[test]
    fn merge_vertices_repoints_walls_and_deletes_duplicates() {
        let mut graph = WallGraph::new();
        let target = graph
            .create_vertex(Vec2::new(40.0, 40.0), VertexFlags::empty())
            .unwrap();
        let duplicate = graph
            .create_vertex(Vec2::new(40.0, 40.0), VertexFlags::empty())
            .unwrap();
        let far = graph
            .create_vertex(Vec2::new(100.0, 0.0), VertexFlags::empty())
            .unwrap();
        let wall = graph
            .create_wall(duplicate, far, WallFlags::empty())
            .unwrap()
            .unwrap();

        let merged = graph.merge_vertices_at_vertex(target);

        assert_eq!(merged, 1);
        assert!(graph.has_vertex(target));
        assert!(!graph.has_vertex(duplicate));
        // Die Wand des Duplikats hängt jetzt am Ziel-Vertex.
        let wall = graph.wall(wall).expect("Wand überlebt den Merge");
        assert_eq!(wall.v1, target);
        assert_eq!(wall.v2, far);
    }

    #[test]
    fn merge_vertices_target_identity_wins() {
        let mut graph = WallGraph::new();
        let first = graph
            .create_vertex(Vec2::new(20.0, 20.0), VertexFlags::empty())
            .unwrap();
        let target = graph
            .create_vertex(Vec2::new(20.0, 20.0), VertexFlags::empty())
            .unwrap();

        graph.merge_vertices_at_vertex(target);

        assert!(graph.has_vertex(target));
        assert!(!graph.has_vertex(first));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn merge_vertices_drops_walls_that_become_self_loops() {
        let mut graph = WallGraph::new();
        let target = graph
            .create_vertex(Vec2::new(0.0, 0.0), VertexFlags::empty())
            .unwrap();
        let duplicate = graph
            .create_vertex(Vec2::new(0.0, 0.0), VertexFlags::empty())
            .unwrap();
        let wall = graph
            .create_wall(duplicate, target, WallFlags::empty())
            .unwrap()
            .unwrap();

        graph.merge_vertices_at_vertex(target);

        // target–target wäre degeneriert, die Wand muss verschwinden.
        assert!(!graph.has_wall(wall));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn merge_vertices_missing_target_is_noop() {
        let mut graph = WallGraph::new();
        assert_eq!(graph.merge_vertices_at_vertex(VertexId(42)), 0);
    }

    #[test]
    fn merge_walls_collapses_duplicate_pairs() {
        let mut graph = WallGraph::new();
        let a = graph.create_vertex(Vec2::ZERO, VertexFlags::empty()).unwrap();
        let b = graph
            .create_vertex(Vec2::new(100.0, 0.0), VertexFlags::empty())
            .unwrap();
        let target = graph.create_wall(a, b, WallFlags::empty()).unwrap().unwrap();
        let duplicate = graph.create_wall(b, a, WallFlags::empty()).unwrap().unwrap();

        let removed = graph.merge_walls_at_wall(target);

        assert_eq!(removed, 1);
        assert!(graph.has_wall(target));
        assert!(!graph.has_wall(duplicate));
        // Die Endpunkte hängen noch an der Ziel-Wand.
        assert!(graph.has_vertex(a));
        assert!(graph.has_vertex(b));
    }

    #[test]
    fn merge_walls_missing_target_is_noop() {
        let mut graph = WallGraph::new();
        assert_eq!(graph.merge_walls_at_wall(WallId(7)), 0);
    }
}
