use super::input::{InputFrame, Key};
use glam::Vec2;

/// Editor-Intent und Editor-Command Events.
/// Intents sind normalisierte Sensor-Events ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Zeiger wurde bewegt (ohne gedrückte Taste)
    PointerMoved { frame: InputFrame },
    /// Primärer Klick (Press + Release ohne Drag)
    PointerPressed { frame: InputFrame },
    /// Drag-Geste gestartet (Press + Bewegung über die Klick-Toleranz)
    DragStarted { frame: InputFrame },
    /// Drag-Position aktualisiert
    DragMoved { frame: InputFrame },
    /// Drag beendet (Taste losgelassen)
    DragEnded { frame: InputFrame },
    /// Drag abgebrochen (z.B. Fokus-Verlust)
    DragCancelled,
    /// Zwei-Finger-Pan-Schritt
    TwoFingerPan { delta: Vec2 },
    /// Zwei-Finger-Geste beendet
    TwoFingerPanEnded,
    /// Diskretes Tastatur-Event
    KeyPressed { key: Key },
    /// Modifier-Zustand hat sich geändert (Drücken oder Loslassen)
    ModifiersChanged { frame: InputFrame },
    /// Undo: Letzte committete Geste rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Geste wiederherstellen
    RedoRequested,
}
