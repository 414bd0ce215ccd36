//! Repräsentiert eine Wand (Kante) zwischen zwei Vertices.

use super::VertexId;
use std::fmt;

/// Eindeutige, opake Wand-ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WallId(pub(crate) u64);

impl fmt::Display for WallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

/// Transiente Zustands-Flags einer Wand als Bitfeld.
///
/// Ein nicht gesetztes Bit bedeutet `false` — Flags werden nie explizit als
/// `false` gespeichert, Löschen entfernt das Bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallFlags(u8);

impl WallFlags {
    /// Wand ist aktuell selektiert.
    pub const SELECTED: Self = Self(1 << 0);
    /// Wand ist Teil einer laufenden Platzier-Geste (noch nicht committet).
    pub const PLACING: Self = Self(1 << 1);
    /// Wand wird aktuell gezogen.
    pub const DRAGGING: Self = Self(1 << 2);
    /// Wand ist ein temporäres Teilstück einer laufenden Wand-Teilung.
    pub const SPLITTING: Self = Self(1 << 3);
    /// Wand ist das Ziel einer laufenden Wand-Teilung.
    pub const SPLIT_TARGET: Self = Self(1 << 4);

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

/// Eine gerade Wand zwischen zwei Vertices.
///
/// Invariante: `v1 != v2`, beide IDs referenzieren existierende Vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    /// Eindeutige ID (unveränderlich nach Erstellung)
    pub id: WallId,
    /// Erster Endpunkt
    pub v1: VertexId,
    /// Zweiter Endpunkt
    pub v2: VertexId,
    /// Transiente Gesten-Flags
    pub flags: WallFlags,
}

impl Wall {
    /// Erstellt eine neue Wand.
    pub fn new(id: WallId, v1: VertexId, v2: VertexId, flags: WallFlags) -> Self {
        Self { id, v1, v2, flags }
    }

    /// Gibt das ungeordnete Endpunkt-Paar zurück (kleinere ID zuerst).
    pub fn endpoint_pair(&self) -> (VertexId, VertexId) {
        if self.v1 <= self.v2 {
            (self.v1, self.v2)
        } else {
            (self.v2, self.v1)
        }
    }

    /// Prüft ob die Wand den übergebenen Vertex berührt.
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.v1 == vertex || self.v2 == vertex
    }
}
