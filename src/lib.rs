//! Grundriss-Editor Library.
//! Graph-Editier-Engine als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    EditorCommand, EditorController, EditorIntent, EditorScene, EditorState, EntityRef,
    InputFrame, Key, Mode, ModeKind, Modifiers,
};
pub use crate::core::{
    AdjacencyIndex, Vertex, VertexFlags, VertexId, Wall, WallFlags, WallGraph, WallId,
};
pub use shared::EditorOptions;
