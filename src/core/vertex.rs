//! Repräsentiert einen Eckpunkt (Vertex) des Wand-Graphen.

use glam::Vec2;
use std::fmt;

/// Eindeutige, opake Vertex-ID.
///
/// IDs werden vom [`WallGraph`](crate::core::WallGraph) fortlaufend vergeben
/// und nach dem Löschen nie wiederverwendet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) u64);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Transiente Zustands-Flags eines Vertex als Bitfeld.
///
/// Ein nicht gesetztes Bit bedeutet `false` — Flags werden nie explizit als
/// `false` gespeichert, Löschen entfernt das Bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VertexFlags(u8);

impl VertexFlags {
    /// Vertex ist aktuell selektiert.
    pub const SELECTED: Self = Self(1 << 0);
    /// Vertex ist Teil einer laufenden Platzier-Geste (noch nicht committet).
    pub const PLACING: Self = Self(1 << 1);
    /// Vertex wird aktuell gezogen.
    pub const DRAGGING: Self = Self(1 << 2);
    /// Vertex ist der Split-Punkt einer laufenden Wand-Teilung.
    pub const SPLITTING: Self = Self(1 << 3);

    /// Leeres Flag-Set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Setzt die übergebenen Flags.
    pub fn set(&mut self, flags: Self) {
        self.0 |= flags.0;
    }

    /// Entfernt die übergebenen Flags.
    pub fn clear(&mut self, flags: Self) {
        self.0 &= !flags.0;
    }

    /// Prüft ob alle übergebenen Flags gesetzt sind.
    pub fn contains(self, flags: Self) -> bool {
        self.0 & flags.0 == flags.0
    }

    /// Gibt `true` zurück wenn kein Flag gesetzt ist.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Ein Eckpunkt des Wand-Graphen.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Eindeutige ID (unveränderlich nach Erstellung)
    pub id: VertexId,
    /// Position in Dokument-Koordinaten (auf das Raster gerastet)
    pub position: Vec2,
    /// Transiente Gesten-Flags
    pub flags: VertexFlags,
}

impl Vertex {
    /// Erstellt einen neuen Vertex.
    pub fn new(id: VertexId, position: Vec2, flags: VertexFlags) -> Self {
        Self {
            id,
            position,
            flags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_set_clear_contains() {
        let mut flags = VertexFlags::empty();
        assert!(flags.is_empty());

        flags.set(VertexFlags::PLACING);
        assert!(flags.contains(VertexFlags::PLACING));
        assert!(!flags.contains(VertexFlags::SELECTED));

        flags.set(VertexFlags::SELECTED);
        flags.clear(VertexFlags::PLACING);
        assert!(!flags.contains(VertexFlags::PLACING));
        assert!(flags.contains(VertexFlags::SELECTED));

        flags.clear(VertexFlags::SELECTED);
        assert!(flags.is_empty());
    }
}
