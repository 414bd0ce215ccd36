//! Die zentrale WallGraph-Datenstruktur mit Vertices und Wänden.

use super::{AdjacencyIndex, Vertex, VertexFlags, VertexId, Wall, WallFlags, WallId};
use anyhow::bail;
use glam::Vec2;
use indexmap::IndexMap;

mod merge;

/// Container für den gesamten Wand-Graphen einer Editier-Session.
///
/// Die Entity-Maps sind `IndexMap`s, damit Iteration (Merge-Kandidaten,
/// Szene-Aufbau) deterministisch in Einfüge-Reihenfolge läuft. Die
/// ID-Zähler gehören zum Graph-Wert und wandern mit jedem Snapshot mit,
/// gelöschte IDs werden nie wiederverwendet.
#[derive(Debug, Clone, PartialEq)]
pub struct WallGraph {
    /// Alle Vertices, indexiert nach ihrer ID
    vertices: IndexMap<VertexId, Vertex>,
    /// Alle Wände, indexiert nach ihrer ID
    walls: IndexMap<WallId, Wall>,
    /// Nächste zu vergebende Vertex-ID
    next_vertex_id: u64,
    /// Nächste zu vergebende Wand-ID
    next_wall_id: u64,
}

impl WallGraph {
    /// Erstellt einen neuen leeren Graphen.
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::new(),
            walls: IndexMap::new(),
            next_vertex_id: 1,
            next_wall_id: 1,
        }
    }

    // ── Vertices ───────────────────────────────────────────────

    /// Erstellt einen Vertex mit frischer ID an der übergebenen Position.
    ///
    /// Nicht-endliche Koordinaten werden an der Erstellungsgrenze
    /// zurückgewiesen: kein Effekt, `None`.
    pub fn create_vertex(&mut self, position: Vec2, flags: VertexFlags) -> Option<VertexId> {
        if !position.is_finite() {
            log::warn!("Vertex mit nicht-endlicher Position verworfen: {position:?}");
            return None;
        }

        let id = VertexId(self.next_vertex_id);
        self.next_vertex_id += 1;
        self.vertices.insert(id, Vertex::new(id, position, flags));
        Some(id)
    }

    /// Gibt den Vertex zur ID zurück.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Prüft ob ein Vertex existiert.
    pub fn has_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Iterator über alle Vertices (read-only, deterministische Reihenfolge).
    pub fn vertices_iter(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Aktualisiert die Position eines Vertex.
    ///
    /// Nicht-endliche Positionen werden verworfen (kein Effekt).
    pub fn update_vertex_position(&mut self, id: VertexId, position: Vec2) -> bool {
        if !position.is_finite() {
            log::warn!("Positions-Update mit nicht-endlichem Wert verworfen: {position:?}");
            return false;
        }
        let Some(vertex) = self.vertices.get_mut(&id) else {
            return false;
        };
        vertex.position = position;
        true
    }

    /// Setzt Flags auf einem Vertex.
    pub fn set_vertex_flags(&mut self, id: VertexId, flags: VertexFlags) -> bool {
        match self.vertices.get_mut(&id) {
            Some(vertex) => {
                vertex.flags.set(flags);
                true
            }
            None => false,
        }
    }

    /// Entfernt Flags von einem Vertex (ein gelöschtes Flag wird nicht als
    /// `false` gespeichert, das Bit verschwindet).
    pub fn clear_vertex_flags(&mut self, id: VertexId, flags: VertexFlags) -> bool {
        match self.vertices.get_mut(&id) {
            Some(vertex) => {
                vertex.flags.clear(flags);
                true
            }
            None => false,
        }
    }

    /// Entfernt einen Vertex inklusive aller Wände, die ihn berühren.
    pub fn delete_vertex(&mut self, id: VertexId) -> Option<Vertex> {
        let removed = self.vertices.shift_remove(&id);
        if removed.is_some() {
            self.walls.retain(|_, wall| !wall.touches(id));
        }
        removed
    }

    // ── Wände ──────────────────────────────────────────────────

    /// Erstellt eine Wand mit frischer ID zwischen zwei Vertices.
    ///
    /// Fehlende Endpunkte sind ein interner Defekt und propagieren als
    /// Fehler. `v1 == v2` ist degenerierte Geometrie und wird als No-op
    /// zurückgewiesen (`Ok(None)`).
    pub fn create_wall(
        &mut self,
        v1: VertexId,
        v2: VertexId,
        flags: WallFlags,
    ) -> anyhow::Result<Option<WallId>> {
        if !self.vertices.contains_key(&v1) || !self.vertices.contains_key(&v2) {
            bail!("Wand-Erstellung mit nicht existierendem Endpunkt ({v1}, {v2})");
        }
        if v1 == v2 {
            log::warn!("Degenerierte Wand {v1}–{v2} verworfen");
            return Ok(None);
        }

        let id = WallId(self.next_wall_id);
        self.next_wall_id += 1;
        self.walls.insert(id, Wall::new(id, v1, v2, flags));
        Ok(Some(id))
    }

    /// Gibt die Wand zur ID zurück.
    pub fn wall(&self, id: WallId) -> Option<&Wall> {
        self.walls.get(&id)
    }

    /// Prüft ob eine Wand existiert.
    pub fn has_wall(&self, id: WallId) -> bool {
        self.walls.contains_key(&id)
    }

    /// Iterator über alle Wände (read-only, deterministische Reihenfolge).
    pub fn walls_iter(&self) -> impl Iterator<Item = &Wall> {
        self.walls.values()
    }

    /// Setzt Flags auf einer Wand.
    pub fn set_wall_flags(&mut self, id: WallId, flags: WallFlags) -> bool {
        match self.walls.get_mut(&id) {
            Some(wall) => {
                wall.flags.set(flags);
                true
            }
            None => false,
        }
    }

    /// Entfernt Flags von einer Wand.
    pub fn clear_wall_flags(&mut self, id: WallId, flags: WallFlags) -> bool {
        match self.walls.get_mut(&id) {
            Some(wall) => {
                wall.flags.clear(flags);
                true
            }
            None => false,
        }
    }

    /// Hängt einen Endpunkt einer Wand auf einen anderen Vertex um.
    ///
    /// Fehlende Wand oder fehlender Ziel-Vertex sind ein interner Defekt.
    pub fn repoint_wall(
        &mut self,
        id: WallId,
        from: VertexId,
        to: VertexId,
    ) -> anyhow::Result<()> {
        if !self.vertices.contains_key(&to) {
            bail!("Umhängen von {id} auf nicht existierenden Vertex {to}");
        }
        let Some(wall) = self.walls.get_mut(&id) else {
            bail!("Umhängen einer nicht existierenden Wand {id}");
        };
        if wall.v1 == from {
            wall.v1 = to;
        }
        if wall.v2 == from {
            wall.v2 = to;
        }
        Ok(())
    }

    /// Entfernt eine Wand; Endpunkte, deren einzige Wand sie war, werden
    /// mitgelöscht (verwaiste Vertices).
    ///
    /// Der Adjazenz-Index muss gegen den Graphen *vor* der Löschung
    /// aufgebaut sein.
    pub fn delete_wall(&mut self, id: WallId, adjacency: &AdjacencyIndex) -> bool {
        let Some(wall) = self.walls.shift_remove(&id) else {
            return false;
        };

        for endpoint in [wall.v1, wall.v2] {
            if adjacency.walls_at(endpoint) == [id] {
                self.vertices.shift_remove(&endpoint);
            }
        }

        true
    }

    // ── Statistik ──────────────────────────────────────────────

    /// Gibt die Anzahl der Vertices zurück.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Gibt die Anzahl der Wände zurück.
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }
}

impl Default for WallGraph {
    fn default() -> Self {
        Self::new()
    }
}
