//! Zentrale Konfiguration für den Grundriss-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use glam::Vec2;

// ── Raster ──────────────────────────────────────────────────────────

/// Rasterweite in Welteinheiten (X-Achse).
pub const GRID_SIZE_X: f32 = 20.0;
/// Rasterweite in Welteinheiten (Y-Achse).
pub const GRID_SIZE_Y: f32 = 20.0;

// ── Gesten ──────────────────────────────────────────────────────────

/// Schwellwert in Welteinheiten, ab dem die Achsen-Sperre beim Ziehen greift.
pub const AXIS_LOCK_THRESHOLD: f32 = 15.0;
/// Schrittweite eines Pfeiltasten-Nudge in Rasterzellen.
pub const NUDGE_GRID_STEPS: f32 = 1.0;

// ── Pan ─────────────────────────────────────────────────────────────

/// Maximaler Pan-Offset vom Ursprung (symmetrisch, pro Achse).
pub const PAN_LIMIT: f32 = 4096.0;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl Snapshots im Undo-Stapel (inkl. Basis-Snapshot).
pub const HISTORY_DEPTH: usize = 200;

// ── Diagnose ────────────────────────────────────────────────────────

/// Maximale Anzahl Einträge im Command-Log.
pub const COMMAND_LOG_LIMIT: usize = 512;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorOptions {
    // ── Raster ──────────────────────────────────────────────────
    /// Rasterweite pro Achse in Welteinheiten
    pub grid_size: Vec2,

    // ── Gesten ──────────────────────────────────────────────────
    /// Schwellwert für die Achsen-Sperre beim Ziehen
    pub axis_lock_threshold: f32,
    /// Schrittweite eines Pfeiltasten-Nudge in Rasterzellen
    pub nudge_grid_steps: f32,

    // ── Pan ─────────────────────────────────────────────────────
    /// Maximaler Pan-Offset vom Ursprung (symmetrisch, pro Achse)
    pub pan_limit: f32,

    // ── History ─────────────────────────────────────────────────
    /// Maximale Anzahl Snapshots im Undo-Stapel
    pub history_depth: usize,

    // ── Diagnose ────────────────────────────────────────────────
    /// Maximale Anzahl Einträge im Command-Log
    pub command_log_limit: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_size: Vec2::new(GRID_SIZE_X, GRID_SIZE_Y),
            axis_lock_threshold: AXIS_LOCK_THRESHOLD,
            nudge_grid_steps: NUDGE_GRID_STEPS,
            pan_limit: PAN_LIMIT,
            history_depth: HISTORY_DEPTH,
            command_log_limit: COMMAND_LOG_LIMIT,
        }
    }
}

impl EditorOptions {
    /// Verschiebung eines einzelnen Nudge-Schritts in Welteinheiten.
    ///
    /// `grid_size * nudge_grid_steps` pro Achse.
    pub fn nudge_step(&self) -> Vec2 {
        self.grid_size * self.nudge_grid_steps
    }
}
