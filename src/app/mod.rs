//! Application-Layer: Controller, State, Events und Gesten-Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod mode;
pub mod scene;
/// Editor-Zustand und Controller
///
/// Dieses Modul verwaltet den Zustand einer Editier-Session (Graph, Modus,
/// Pan, History).
pub mod state;

pub use crate::core::WallGraph;
pub use crate::shared::EditorOptions;
pub use command_log::CommandLog;
pub use controller::EditorController;
pub use events::{EditorCommand, EditorIntent, EntityRef, InputFrame, Key, Modifiers};
pub use mode::{Mode, ModeKind};
pub use scene::{build as build_scene, EditorScene};
pub use state::{EditorState, PanState};
