//! Feature-Handler für EditorCommand-Verarbeitung.
//!
//! Ein Handler-Modul pro Gesten-Familie; jeder Handler prüft zuerst den
//! Modus und kehrt bei Nicht-Treffern still zurück. Der Controller
//! dispatcht an die passende Handler-Funktion.

pub mod deleting;
pub mod dragging;
pub mod history;
pub mod panning;
pub mod placing;
pub mod selecting;
pub mod splitting;
