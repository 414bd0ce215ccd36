//! Editor-Controller für zentrale Event-Verarbeitung.

use super::scene::{self, EditorScene};
use super::{EditorCommand, EditorIntent, EditorState};

/// Orchestriert Sensor-Intents und Gesten-Handler auf dem EditorState.
#[derive(Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut EditorState,
        intent: EditorIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem EditorState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut EditorState,
        command: EditorCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Platzieren ===
            EditorCommand::BeginPlaceVertex { point } => handlers::placing::begin_vertex(state, point)?,
            EditorCommand::UpdatePlaceVertex { point } => {
                handlers::placing::update_vertex(state, point)?
            }
            EditorCommand::ConfirmPlaceVertex => handlers::placing::confirm_vertex(state)?,
            EditorCommand::UpdatePlaceWall { point } => handlers::placing::update_wall(state, point)?,
            EditorCommand::ConfirmPlaceWall => handlers::placing::confirm_wall(state)?,
            EditorCommand::CancelPlacing => handlers::placing::cancel(state)?,

            // === Teilen ===
            EditorCommand::BeginSplit { wall, point } => {
                handlers::splitting::begin(state, wall, point)?
            }
            EditorCommand::UpdateSplit { hover_wall, point } => {
                handlers::splitting::update(state, hover_wall, point)?
            }
            EditorCommand::ConfirmSplit => handlers::splitting::confirm(state)?,
            EditorCommand::CancelSplit => handlers::splitting::cancel(state)?,

            // === Selektion ===
            EditorCommand::SelectVertex { vertex } => {
                handlers::selecting::select_vertex(state, vertex)?
            }
            EditorCommand::SelectWall { wall } => handlers::selecting::select_wall(state, wall)?,
            EditorCommand::NudgeSelection { delta } => handlers::selecting::nudge(state, delta)?,
            EditorCommand::DeleteSelection => handlers::selecting::delete(state)?,
            EditorCommand::ClearSelection => handlers::selecting::clear(state)?,

            // === Ziehen ===
            EditorCommand::BeginDragVertex { vertex } => {
                handlers::dragging::begin_vertex(state, vertex)?
            }
            EditorCommand::BeginDragWall { wall } => handlers::dragging::begin_wall(state, wall)?,
            EditorCommand::UpdateDrag {
                delta,
                axis_modifier,
            } => handlers::dragging::update(state, delta, axis_modifier)?,
            EditorCommand::ConfirmDrag => handlers::dragging::confirm(state)?,
            EditorCommand::CancelDrag => handlers::dragging::cancel(state)?,

            // === Entity-Löschen ===
            EditorCommand::EnterEntityDelete => handlers::deleting::enter(state)?,
            EditorCommand::DeleteEntityAt { target } => handlers::deleting::delete_at(state, target)?,
            EditorCommand::ExitEntityDelete => handlers::deleting::exit(state)?,

            // === Pan ===
            EditorCommand::BeginPan { two_finger } => handlers::panning::begin(state, two_finger)?,
            EditorCommand::UpdatePan { delta } => handlers::panning::update(state, delta)?,
            EditorCommand::EndPan => handlers::panning::end(state)?,

            // === History ===
            EditorCommand::Undo => handlers::history::undo(state),
            EditorCommand::Redo => handlers::history::redo(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen EditorState.
    pub fn build_scene(&self, state: &EditorState) -> EditorScene {
        scene::build(state)
    }
}
