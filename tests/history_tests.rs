//! Integrationstests für die Undo/Redo-History über den Controller.

use glam::Vec2;
use grundriss_editor::{
    EditorCommand, EditorController, EditorIntent, EditorOptions, EditorState, Mode, WallGraph,
};

/// Initialisiert Test-Logging und liefert Controller plus frische Session.
fn setup() -> (EditorController, EditorState) {
    let _ = env_logger::builder().is_test(true).try_init();
    (EditorController::new(), EditorState::new())
}

/// Platziert einen einzelnen Vertex und beendet die Kette (ein Commit).
fn place_vertex(controller: &mut EditorController, state: &mut EditorState, point: Vec2) {
    controller
        .handle_command(state, EditorCommand::BeginPlaceVertex { point })
        .expect("Platzieren startet");
    controller
        .handle_command(state, EditorCommand::ConfirmPlaceVertex)
        .expect("Vertex-Commit");
    controller
        .handle_command(state, EditorCommand::CancelPlacing)
        .expect("Kette beendet");
}

#[test]
fn test_undo_n_times_restores_structurally_equal_base() {
    let (mut controller, mut state) = setup();

    for i in 0..3 {
        place_vertex(&mut controller, &mut state, Vec2::new(i as f32 * 20.0, 0.0));
    }
    assert_eq!(state.graph.vertex_count(), 3);

    for _ in 0..3 {
        controller
            .handle_intent(&mut state, EditorIntent::UndoRequested)
            .expect("Undo");
    }

    assert_eq!(*state.graph, WallGraph::new());
    assert!(!state.can_undo());
    assert!(state.can_redo());
}

#[test]
fn test_redo_restores_undone_commit() {
    let (mut controller, mut state) = setup();

    place_vertex(&mut controller, &mut state, Vec2::new(0.0, 0.0));
    place_vertex(&mut controller, &mut state, Vec2::new(20.0, 0.0));

    controller
        .handle_intent(&mut state, EditorIntent::UndoRequested)
        .expect("Undo");
    assert_eq!(state.graph.vertex_count(), 1);

    controller
        .handle_intent(&mut state, EditorIntent::RedoRequested)
        .expect("Redo");
    assert_eq!(state.graph.vertex_count(), 2);
    assert!(!state.can_redo());
}

#[test]
fn test_commit_after_undo_discards_redo() {
    let (mut controller, mut state) = setup();

    place_vertex(&mut controller, &mut state, Vec2::new(0.0, 0.0));
    place_vertex(&mut controller, &mut state, Vec2::new(20.0, 0.0));
    controller
        .handle_intent(&mut state, EditorIntent::UndoRequested)
        .expect("Undo");
    assert!(state.can_redo());

    place_vertex(&mut controller, &mut state, Vec2::new(40.0, 0.0));
    assert!(!state.can_redo());

    let before = state.graph.clone();
    controller
        .handle_intent(&mut state, EditorIntent::RedoRequested)
        .expect("Redo (No-op)");
    assert_eq!(*state.graph, *before);
}

#[test]
fn test_undo_stack_bounded_with_protected_base() {
    let (mut controller, _) = setup();
    let options = EditorOptions {
        history_depth: 3,
        ..EditorOptions::default()
    };
    let mut state = EditorState::with_options(options);

    for i in 0..6 {
        place_vertex(&mut controller, &mut state, Vec2::new(i as f32 * 20.0, 0.0));
    }
    assert!(state.history.depth() <= 3);

    // Nach Erschöpfung aller Undos liegt die geschützte Basis an.
    while state.can_undo() {
        controller
            .handle_intent(&mut state, EditorIntent::UndoRequested)
            .expect("Undo");
    }
    assert_eq!(*state.graph, WallGraph::new());
}

#[test]
fn test_undo_resets_mode_to_idle() {
    let (mut controller, mut state) = setup();

    place_vertex(&mut controller, &mut state, Vec2::new(0.0, 0.0));
    let vertex = state.graph.vertices_iter().next().expect("ein Vertex").id;

    controller
        .handle_command(&mut state, EditorCommand::SelectVertex { vertex })
        .expect("Selektion");
    assert!(matches!(state.mode, Mode::SelectingVertex { .. }));

    controller
        .handle_intent(&mut state, EditorIntent::UndoRequested)
        .expect("Undo");
    assert!(matches!(state.mode, Mode::Idle));
}

#[test]
fn test_undo_during_gesture_is_noop() {
    let (mut controller, mut state) = setup();

    place_vertex(&mut controller, &mut state, Vec2::new(0.0, 0.0));
    controller
        .handle_command(
            &mut state,
            EditorCommand::BeginPlaceVertex {
                point: Vec2::new(100.0, 100.0),
            },
        )
        .expect("Platzieren startet");

    controller
        .handle_intent(&mut state, EditorIntent::UndoRequested)
        .expect("Undo wird nicht gemappt");

    // Die laufende Geste bleibt unberührt.
    assert!(matches!(state.mode, Mode::PlacingVertex { .. }));
    assert_eq!(state.graph.vertex_count(), 2);
}
