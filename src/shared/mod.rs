//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die zwischen `core` und `app`
//! geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;

pub use options::EditorOptions;
pub use options::{
    AXIS_LOCK_THRESHOLD, COMMAND_LOG_LIMIT, GRID_SIZE_X, GRID_SIZE_Y, HISTORY_DEPTH,
    NUDGE_GRID_STEPS, PAN_LIMIT,
};
