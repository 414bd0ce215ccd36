//! Der Gesten-Modus als Tagged-Union mit gestenlokalem Zustand.

use crate::core::{VertexId, WallId};
use glam::Vec2;

/// Achse für die Bewegungs-Sperre beim Ziehen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Achsen-Sperre für Drag-Gesten.
///
/// Rastet auf die dominante Achse ein, sobald die kumulierte Bewegung auf
/// einer Achse den Schwellwert erreicht, und bleibt eingerastet, solange der
/// Achsen-Modifier gehalten wird. Loslassen des Modifiers löst die Sperre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisLock {
    axis: Option<Axis>,
}

impl AxisLock {
    /// Beschränkt das kumulierte Drag-Delta gemäß Sperr-Zustand.
    pub fn constrain(&mut self, delta: Vec2, engaged: bool, threshold: f32) -> Vec2 {
        if !engaged {
            self.axis = None;
            return delta;
        }

        if self.axis.is_none() && (delta.x.abs() >= threshold || delta.y.abs() >= threshold) {
            self.axis = Some(if delta.x.abs() >= delta.y.abs() {
                Axis::Horizontal
            } else {
                Axis::Vertical
            });
        }

        match self.axis {
            Some(Axis::Horizontal) => Vec2::new(delta.x, 0.0),
            Some(Axis::Vertical) => Vec2::new(0.0, delta.y),
            None => delta,
        }
    }
}

/// Der noch nicht committete Kopf einer laufenden Wand-Platzierung.
///
/// Wird beim ersten Pointer-Move in `PlacingWall` lazily erzeugt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingWall {
    /// Kopf-Vertex, der dem Zeiger folgt
    pub head: VertexId,
    /// Verbindende Wand vom Tail zum Kopf
    pub wall: WallId,
}

/// Aktiver Gesten-Modus.
///
/// Genau ein Modus ist zu jedem Zeitpunkt aktiv; er ist die einzige Quelle
/// der Wahrheit über die laufende Geste. Gestenlokaler Zustand (Ziel-IDs,
/// Start-Koordinaten, Achsen-Sperre) liegt als Payload im Modus — nie als
/// Geometrie-Kopie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Keine Geste aktiv
    Idle,
    /// Ein Vertex ist selektiert
    SelectingVertex { vertex: VertexId },
    /// Eine Wand ist selektiert
    SelectingWall { wall: WallId },
    /// Temporärer Vertex folgt dem Zeiger
    PlacingVertex { vertex: VertexId },
    /// Ketten-Platzierung: Tail steht fest, Kopf + Wand folgen dem Zeiger
    PlacingWall {
        tail: VertexId,
        pending: Option<PendingWall>,
    },
    /// Wand-Teilung: Split-Vertex auf der Ziel-Wand, zwei temporäre Schenkel
    SplittingWall {
        vertex: VertexId,
        target: WallId,
        leg_a: WallId,
        leg_b: WallId,
    },
    /// Ein Vertex wird gezogen
    DraggingVertex {
        vertex: VertexId,
        origin: Vec2,
        lock: AxisLock,
    },
    /// Eine Wand wird gezogen (beide Endpunkte bewegen sich)
    DraggingWall {
        wall: WallId,
        origin_a: Vec2,
        origin_b: Vec2,
        lock: AxisLock,
    },
    /// Ansicht wird verschoben, der Graph bleibt unberührt
    Panning { two_finger: bool },
    /// Lösch-Modifier gehalten: jeder Klick löscht die getroffene Entity
    EntityDelete,
}

/// Feldlose Sicht auf den Modus für die Szene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Idle,
    SelectingVertex,
    SelectingWall,
    PlacingVertex,
    PlacingWall,
    SplittingWall,
    DraggingVertex,
    DraggingWall,
    Panning,
    EntityDelete,
}

impl Mode {
    /// Gibt die feldlose Modus-Art zurück.
    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Idle => ModeKind::Idle,
            Mode::SelectingVertex { .. } => ModeKind::SelectingVertex,
            Mode::SelectingWall { .. } => ModeKind::SelectingWall,
            Mode::PlacingVertex { .. } => ModeKind::PlacingVertex,
            Mode::PlacingWall { .. } => ModeKind::PlacingWall,
            Mode::SplittingWall { .. } => ModeKind::SplittingWall,
            Mode::DraggingVertex { .. } => ModeKind::DraggingVertex,
            Mode::DraggingWall { .. } => ModeKind::DraggingWall,
            Mode::Panning { .. } => ModeKind::Panning,
            Mode::EntityDelete => ModeKind::EntityDelete,
        }
    }
}
