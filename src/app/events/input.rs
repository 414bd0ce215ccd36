//! Normalisierter Input-Frame des (externen) Input-Sensors.

use crate::core::{VertexId, WallId};
use glam::Vec2;

/// Nicht-besitzende Referenz auf die Entity unter dem Zeiger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef {
    Vertex(VertexId),
    Wall(WallId),
}

/// Zustand der Gesten-Modifier zum Zeitpunkt eines Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Platzier-Modifier gehalten
    pub place: bool,
    /// Drag-Modifier gehalten
    pub drag: bool,
    /// Pan-Modifier gehalten
    pub pan: bool,
    /// Lösch-Modifier gehalten
    pub delete: bool,
    /// Achsen-Sperre-Modifier gehalten
    pub axis: bool,
}

/// Taste eines diskreten Tastatur-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Backspace,
    Escape,
}

/// Ein Pointer-Zustand, wie ihn der Input-Sensor pro Event liefert.
///
/// Positionen sind logische Dokument-Koordinaten (noch ungerastert, das
/// Rastern übernimmt die Engine). `drag_delta` ist kumulativ seit
/// Gesten-Beginn, `step_delta` inkrementell seit dem letzten Event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputFrame {
    /// Zeiger-Position in Dokument-Koordinaten
    pub point: Vec2,
    /// Nächste interaktive Entity unter dem Zeiger
    pub hover: Option<EntityRef>,
    /// Modifier-Zustand
    pub modifiers: Modifiers,
    /// Kumuliertes Drag-Delta seit Gesten-Beginn
    pub drag_delta: Vec2,
    /// Inkrementelles Delta seit dem letzten Event
    pub step_delta: Vec2,
}

impl InputFrame {
    /// Frame an einer Position ohne Hover, Modifier oder Drag.
    pub fn at(point: Vec2) -> Self {
        Self {
            point,
            hover: None,
            modifiers: Modifiers::default(),
            drag_delta: Vec2::ZERO,
            step_delta: Vec2::ZERO,
        }
    }
}
