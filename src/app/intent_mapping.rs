//! Mapping von Sensor-Intents auf mutierende Editor-Commands.

use super::events::{EntityRef, InputFrame, Key};
use super::mode::Mode;
use super::{EditorCommand, EditorIntent, EditorState};
use glam::Vec2;

/// Übersetzt einen `EditorIntent` in eine Sequenz ausführbarer
/// `EditorCommand`s. Reine Funktion über Modus + Modifier-Zustand.
pub fn map_intent_to_commands(state: &EditorState, intent: EditorIntent) -> Vec<EditorCommand> {
    match intent {
        EditorIntent::PointerPressed { frame } => map_pointer_pressed(state, frame),
        EditorIntent::PointerMoved { frame } => map_pointer_moved(state, frame),
        EditorIntent::DragStarted { frame } => map_drag_started(state, frame),
        EditorIntent::DragMoved { frame } => map_drag_moved(state, frame),
        EditorIntent::DragEnded { frame: _ } => match state.mode {
            Mode::DraggingVertex { .. } | Mode::DraggingWall { .. } => {
                vec![EditorCommand::ConfirmDrag]
            }
            Mode::Panning { two_finger: false } => vec![EditorCommand::EndPan],
            _ => vec![],
        },
        EditorIntent::DragCancelled => match state.mode {
            Mode::DraggingVertex { .. } | Mode::DraggingWall { .. } => {
                vec![EditorCommand::CancelDrag]
            }
            Mode::Panning { .. } => vec![EditorCommand::EndPan],
            _ => vec![],
        },
        EditorIntent::TwoFingerPan { delta } => match state.mode {
            Mode::Idle => vec![
                EditorCommand::BeginPan { two_finger: true },
                EditorCommand::UpdatePan { delta },
            ],
            Mode::Panning { two_finger: true } => vec![EditorCommand::UpdatePan { delta }],
            _ => vec![],
        },
        EditorIntent::TwoFingerPanEnded => match state.mode {
            Mode::Panning { two_finger: true } => vec![EditorCommand::EndPan],
            _ => vec![],
        },
        EditorIntent::KeyPressed { key } => map_key_pressed(state, key),
        EditorIntent::ModifiersChanged { frame } => match state.mode {
            Mode::Idle if frame.modifiers.delete => vec![EditorCommand::EnterEntityDelete],
            Mode::EntityDelete if !frame.modifiers.delete => {
                vec![EditorCommand::ExitEntityDelete]
            }
            _ => vec![],
        },
        EditorIntent::UndoRequested => match state.mode {
            Mode::Idle | Mode::SelectingVertex { .. } | Mode::SelectingWall { .. } => {
                vec![EditorCommand::Undo]
            }
            _ => vec![],
        },
        EditorIntent::RedoRequested => match state.mode {
            Mode::Idle | Mode::SelectingVertex { .. } | Mode::SelectingWall { .. } => {
                vec![EditorCommand::Redo]
            }
            _ => vec![],
        },
    }
}

fn map_pointer_pressed(state: &EditorState, frame: InputFrame) -> Vec<EditorCommand> {
    match state.mode {
        Mode::Idle => {
            if frame.modifiers.delete {
                // Modifier-Wechsel kam noch nicht an; nachziehen und löschen.
                let mut commands = vec![EditorCommand::EnterEntityDelete];
                if let Some(target) = frame.hover {
                    commands.push(EditorCommand::DeleteEntityAt { target });
                }
                commands
            } else if frame.modifiers.place {
                vec![EditorCommand::BeginPlaceVertex { point: frame.point }]
            } else {
                match frame.hover {
                    Some(EntityRef::Vertex(vertex)) => {
                        vec![EditorCommand::SelectVertex { vertex }]
                    }
                    Some(EntityRef::Wall(wall)) => vec![EditorCommand::SelectWall { wall }],
                    None => vec![],
                }
            }
        }
        Mode::SelectingVertex { .. } | Mode::SelectingWall { .. } => match frame.hover {
            Some(EntityRef::Vertex(vertex)) => vec![EditorCommand::SelectVertex { vertex }],
            Some(EntityRef::Wall(wall)) => vec![EditorCommand::SelectWall { wall }],
            None => vec![EditorCommand::ClearSelection],
        },
        Mode::PlacingVertex { .. } => vec![EditorCommand::ConfirmPlaceVertex],
        Mode::PlacingWall { .. } => vec![EditorCommand::ConfirmPlaceWall],
        Mode::SplittingWall { .. } => vec![EditorCommand::ConfirmSplit],
        Mode::EntityDelete => match frame.hover {
            Some(target) => vec![EditorCommand::DeleteEntityAt { target }],
            None => vec![],
        },
        Mode::DraggingVertex { .. } | Mode::DraggingWall { .. } | Mode::Panning { .. } => vec![],
    }
}

fn map_pointer_moved(state: &EditorState, frame: InputFrame) -> Vec<EditorCommand> {
    match state.mode {
        Mode::PlacingVertex { .. } => match frame.hover {
            // Über einer Wand verzweigt die Platzierung in die Teilung.
            Some(EntityRef::Wall(wall)) => vec![EditorCommand::BeginSplit {
                wall,
                point: frame.point,
            }],
            _ => vec![EditorCommand::UpdatePlaceVertex { point: frame.point }],
        },
        Mode::PlacingWall { .. } => vec![EditorCommand::UpdatePlaceWall { point: frame.point }],
        Mode::SplittingWall { .. } => {
            let hover_wall = match frame.hover {
                Some(EntityRef::Wall(wall)) => Some(wall),
                _ => None,
            };
            vec![EditorCommand::UpdateSplit {
                hover_wall,
                point: frame.point,
            }]
        }
        _ => vec![],
    }
}

fn map_drag_started(state: &EditorState, frame: InputFrame) -> Vec<EditorCommand> {
    if !matches!(state.mode, Mode::Idle) {
        return vec![];
    }
    if frame.modifiers.pan {
        return vec![EditorCommand::BeginPan { two_finger: false }];
    }
    if frame.modifiers.drag {
        return match frame.hover {
            Some(EntityRef::Vertex(vertex)) => vec![EditorCommand::BeginDragVertex { vertex }],
            Some(EntityRef::Wall(wall)) => vec![EditorCommand::BeginDragWall { wall }],
            None => vec![],
        };
    }
    vec![]
}

fn map_drag_moved(state: &EditorState, frame: InputFrame) -> Vec<EditorCommand> {
    match state.mode {
        Mode::DraggingVertex { .. } | Mode::DraggingWall { .. } => {
            vec![EditorCommand::UpdateDrag {
                delta: frame.drag_delta,
                axis_modifier: frame.modifiers.axis,
            }]
        }
        Mode::Panning { two_finger: false } => vec![EditorCommand::UpdatePan {
            delta: frame.step_delta,
        }],
        _ => vec![],
    }
}

fn map_key_pressed(state: &EditorState, key: Key) -> Vec<EditorCommand> {
    match state.mode {
        Mode::SelectingVertex { .. } | Mode::SelectingWall { .. } => {
            let step = state.options.nudge_step();
            match key {
                // Y-Achse zeigt nach unten (Dokument-Koordinaten).
                Key::ArrowUp => vec![EditorCommand::NudgeSelection {
                    delta: Vec2::new(0.0, -step.y),
                }],
                Key::ArrowDown => vec![EditorCommand::NudgeSelection {
                    delta: Vec2::new(0.0, step.y),
                }],
                Key::ArrowLeft => vec![EditorCommand::NudgeSelection {
                    delta: Vec2::new(-step.x, 0.0),
                }],
                Key::ArrowRight => vec![EditorCommand::NudgeSelection {
                    delta: Vec2::new(step.x, 0.0),
                }],
                Key::Backspace => vec![EditorCommand::DeleteSelection],
                Key::Escape => vec![EditorCommand::ClearSelection],
            }
        }
        Mode::PlacingVertex { .. } | Mode::PlacingWall { .. } => match key {
            Key::Escape => vec![EditorCommand::CancelPlacing],
            _ => vec![],
        },
        Mode::SplittingWall { .. } => match key {
            Key::Escape => vec![EditorCommand::CancelSplit],
            _ => vec![],
        },
        _ => vec![],
    }
}
