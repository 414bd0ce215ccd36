use super::input::EntityRef;
use crate::core::{VertexId, WallId};
use glam::Vec2;

/// Mutierende Commands der Gesten-Statemachine.
///
/// Pro Geste ein Start/Update/Confirm/Cancel-Tupel; jeder Command ist über
/// Entity-ID und/oder Punkt parametrisiert. Ein Command, der den aktiven
/// Modus nicht trifft, ist ein stilles No-op.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    // === Platzieren ===
    /// Platzier-Kette starten: temporären Vertex am Punkt erzeugen
    BeginPlaceVertex { point: Vec2 },
    /// Temporären Platzier-Vertex dem Zeiger nachführen
    UpdatePlaceVertex { point: Vec2 },
    /// Platzier-Vertex committen (Merge, wird Tail der Wand-Kette)
    ConfirmPlaceVertex,
    /// Wand-Kopf dem Zeiger nachführen (erzeugt Kopf + Wand lazily)
    UpdatePlaceWall { point: Vec2 },
    /// Wand committen (Merges, Kopf wird neuer Tail)
    ConfirmPlaceWall,
    /// Platzier-Kette abbrechen, temporäre Entities verwerfen
    CancelPlacing,

    // === Teilen ===
    /// Wand-Teilung starten (verzweigt aus der Vertex-Platzierung)
    BeginSplit { wall: WallId, point: Vec2 },
    /// Split-Vertex nachführen, ggf. auf andere Ziel-Wand wechseln
    UpdateSplit {
        hover_wall: Option<WallId>,
        point: Vec2,
    },
    /// Teilung committen: Ziel-Wand durch die zwei Schenkel ersetzen
    ConfirmSplit,
    /// Teilung abbrechen, Split-Vertex und Schenkel verwerfen
    CancelSplit,

    // === Selektion ===
    /// Vertex selektieren (wechselt ggf. die bestehende Selektion)
    SelectVertex { vertex: VertexId },
    /// Wand selektieren
    SelectWall { wall: WallId },
    /// Selektion um ein Delta verschieben (ein Raster-Schritt pro Tastendruck)
    NudgeSelection { delta: Vec2 },
    /// Selektion löschen (kaskadierend)
    DeleteSelection,
    /// Selektion aufheben
    ClearSelection,

    // === Ziehen ===
    /// Vertex-Drag starten
    BeginDragVertex { vertex: VertexId },
    /// Wand-Drag starten (beide Endpunkte)
    BeginDragWall { wall: WallId },
    /// Drag-Position aus kumuliertem Delta neu berechnen
    UpdateDrag { delta: Vec2, axis_modifier: bool },
    /// Drag committen (Merges + History)
    ConfirmDrag,
    /// Drag abbrechen, Start-Koordinaten wiederherstellen
    CancelDrag,

    // === Entity-Löschen ===
    /// Lösch-Modus betreten (Modifier gedrückt)
    EnterEntityDelete,
    /// Getroffene Entity sofort löschen (kaskadierend)
    DeleteEntityAt { target: EntityRef },
    /// Lösch-Modus verlassen (Modifier losgelassen)
    ExitEntityDelete,

    // === Pan ===
    /// Pan starten
    BeginPan { two_finger: bool },
    /// Pan-Offset um ein inkrementelles Delta verschieben (geklemmt)
    UpdatePan { delta: Vec2 },
    /// Pan beenden
    EndPan,

    // === History ===
    /// Letzte committete Geste rückgängig machen
    Undo,
    /// Rückgängig gemachte Geste wiederherstellen
    Redo,
}
