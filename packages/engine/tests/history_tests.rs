//! Time-travel behavior: bounded history, undo/redo round trips

use std::rc::Rc;
use viewforge_engine::{BuilderEngine, ComponentKind, ComponentNode, DEFAULT_HISTORY_CAP};
use viewforge_registry::{install_builtins, ComponentRegistry};

fn engine_with_view() -> BuilderEngine {
    let mut registry = ComponentRegistry::new();
    install_builtins(&mut registry);
    let mut engine = BuilderEngine::new(Rc::new(registry));
    engine.create_view("Landing", "");
    engine
}

fn text_node(id: &str) -> ComponentNode {
    ComponentNode::new(id, ComponentKind::Atomic, "Text")
}

#[test]
fn test_undo_k_times_restores_initial_document() {
    let mut engine = engine_with_view();
    let initial = engine.current_view().unwrap().clone();

    let k = 5;
    for i in 0..k {
        assert!(engine.add_component(text_node(&format!("n{}", i)), None));
    }

    for _ in 0..k {
        assert!(engine.undo());
    }
    assert!(!engine.undo());

    assert_eq!(engine.current_view().unwrap(), &initial);
}

#[test]
fn test_redo_k_times_restores_final_document() {
    let mut engine = engine_with_view();

    let k = 4;
    for i in 0..k {
        engine.add_component(text_node(&format!("n{}", i)), None);
    }
    let final_doc = engine.current_view().unwrap().clone();

    for _ in 0..k {
        engine.undo();
    }
    for _ in 0..k {
        assert!(engine.redo());
    }
    assert!(!engine.redo());

    assert_eq!(engine.current_view().unwrap(), &final_doc);
}

#[test]
fn test_history_never_exceeds_cap() {
    let mut engine = engine_with_view();

    for i in 0..60 {
        engine.add_component(text_node(&format!("n{}", i)), None);
    }

    assert_eq!(engine.history_len(), DEFAULT_HISTORY_CAP);

    let mut undos = 0;
    while engine.undo() {
        undos += 1;
    }
    assert_eq!(undos, DEFAULT_HISTORY_CAP - 1);
}

#[test]
fn test_edit_after_undo_discards_future() {
    let mut engine = engine_with_view();

    engine.add_component(text_node("a"), None);
    engine.add_component(text_node("b"), None);

    engine.undo();
    assert!(engine.can_redo());

    engine.add_component(text_node("c"), None);
    assert!(!engine.can_redo());
    assert!(!engine.redo());

    assert!(engine.find_node("a").is_some());
    assert!(engine.find_node("b").is_none());
    assert!(engine.find_node("c").is_some());
}

#[test]
fn test_time_travel_does_not_push_history() {
    let mut engine = engine_with_view();

    engine.add_component(text_node("a"), None);
    engine.add_component(text_node("b"), None);
    let len = engine.history_len();

    engine.undo();
    engine.redo();
    engine.undo();

    assert_eq!(engine.history_len(), len);
}

#[test]
fn test_snapshots_immune_to_later_mutation() {
    let mut engine = engine_with_view();

    engine.add_component(text_node("a"), None);
    engine.add_component(text_node("child-of-a"), Some("a"));

    // Mutate the live tree, then travel back past the mutation
    engine.remove_component("child-of-a");
    engine.undo();

    let node = engine.find_node("a").unwrap();
    assert_eq!(node.children.len(), 1);
    assert_eq!(node.children[0].id, "child-of-a");
}

#[test]
fn test_set_current_view_pushes_entry_and_clears_dirty() {
    let mut engine = engine_with_view();
    engine.add_component(text_node("a"), None);
    assert!(engine.is_dirty());

    let replacement = viewforge_engine::ViewDocument::new("Imported", "");
    engine.set_current_view(Some(replacement.clone()));

    assert!(!engine.is_dirty());
    assert_eq!(engine.current_view().unwrap().name, "Imported");

    // Undo steps back to the document before the replacement
    assert!(engine.undo());
    assert_eq!(engine.current_view().unwrap().name, "Landing");
}

#[test]
fn test_custom_history_cap() {
    let mut registry = ComponentRegistry::new();
    install_builtins(&mut registry);
    let mut engine = BuilderEngine::with_history_cap(Rc::new(registry), 5);
    engine.create_view("Landing", "");

    for i in 0..20 {
        engine.add_component(text_node(&format!("n{}", i)), None);
    }

    assert_eq!(engine.history_len(), 5);
}
