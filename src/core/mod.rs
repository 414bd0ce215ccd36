//! Core-Domänentypen: Vertices, Wände, WallGraph, Adjazenz-Index, Geometrie.

pub mod adjacency;
pub mod geometry;
pub mod vertex;
pub mod wall;
/// Core-Datenmodell des Grundriss-Editors
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - WallGraph: Container für alle Vertices und Wände
/// - Vertex: Einzelner Eckpunkt mit Position und Flags
/// - Wall: Gerade Wand zwischen zwei Vertices
pub mod wall_graph;

pub use adjacency::AdjacencyIndex;
pub use geometry::{colinear_point, snap_to_grid};
pub use vertex::{Vertex, VertexFlags, VertexId};
pub use wall::{Wall, WallFlags, WallId};
pub use wall_graph::WallGraph;
