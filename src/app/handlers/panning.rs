//! Handler für das Verschieben der Ansicht.

use crate::app::mode::Mode;
use crate::app::EditorState;
use glam::Vec2;

/// Startet das Pannen, solange keine Geste läuft.
pub fn begin(state: &mut EditorState, two_finger: bool) -> anyhow::Result<()> {
    if !matches!(state.mode, Mode::Idle) {
        return Ok(());
    }
    state.mode = Mode::Panning { two_finger };
    log::debug!("Pan gestartet (two_finger: {two_finger})");
    Ok(())
}

/// Verschiebt den Offset um ein inkrementelles Delta (geklemmt).
pub fn update(state: &mut EditorState, delta: Vec2) -> anyhow::Result<()> {
    if !matches!(state.mode, Mode::Panning { .. }) {
        return Ok(());
    }
    let limit = state.options.pan_limit;
    state.pan.pan_by(delta, limit);
    Ok(())
}

/// Beendet das Pannen.
pub fn end(state: &mut EditorState) -> anyhow::Result<()> {
    if !matches!(state.mode, Mode::Panning { .. }) {
        return Ok(());
    }
    state.mode = Mode::Idle;
    log::debug!("Pan beendet");
    Ok(())
}
