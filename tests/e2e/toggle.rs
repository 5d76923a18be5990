use crate::common::fixtures::{label, small_tree};
use crate::common::harness::ViewerTestHarness;
use abtree::view::tree::{NodeId, NodeState};
use crossterm::event::{KeyCode, KeyModifiers};

#[test]
fn test_click_expands_root() {
    let mut harness = ViewerTestHarness::new(small_tree(), 80, 24).unwrap();
    harness.render().unwrap();

    harness.click_node(NodeId(0)).unwrap();

    harness.assert_screen_contains(&label(2));
    harness.assert_screen_contains(&label(3));
    // Grandchildren stay hidden until their parent is clicked
    harness.assert_screen_not_contains(&label(4));
    harness.assert_screen_not_contains(&label(6));
}

#[test]
fn test_click_label_toggles_too() {
    let mut harness = ViewerTestHarness::new(small_tree(), 80, 24).unwrap();
    harness.render().unwrap();

    let (column, row) = harness.find_text(&label(1)).unwrap();
    harness.click(column + 3, row).unwrap();
    harness.assert_screen_contains(&label(2));
}

#[test]
fn test_double_click_restores_render() {
    let mut harness = ViewerTestHarness::new(small_tree(), 80, 24).unwrap();
    harness.render().unwrap();
    let before = harness.screen_to_string();

    harness.click_node(NodeId(0)).unwrap();
    assert_ne!(harness.screen_to_string(), before);
    harness.click_node(NodeId(0)).unwrap();

    assert_eq!(harness.screen_to_string(), before);
    assert_eq!(
        harness.viewer().view().state(NodeId(0)),
        Some(NodeState::Collapsed)
    );
}

#[test]
fn test_toggle_leaves_siblings_alone() {
    let mut harness = ViewerTestHarness::new(small_tree(), 80, 24).unwrap();
    harness.render().unwrap();
    harness.click_node(NodeId(0)).unwrap();
    harness.click_node(NodeId(1)).unwrap();
    harness.click_node(NodeId(4)).unwrap();

    harness.assert_screen_contains(&label(4));
    harness.assert_screen_contains(&label(6));

    // Collapse node 2; node 3's subtree is untouched
    harness.click_node(NodeId(1)).unwrap();
    harness.assert_screen_not_contains(&label(4));
    harness.assert_screen_not_contains(&label(5));
    harness.assert_screen_contains(&label(6));
    assert!(harness.viewer().view().is_expanded(NodeId(4)));
    assert!(harness.viewer().view().is_expanded(NodeId(0)));
}

#[test]
fn test_reexpanded_children_start_collapsed() {
    let mut harness = ViewerTestHarness::new(small_tree(), 80, 24).unwrap();
    harness.render().unwrap();
    harness.click_node(NodeId(0)).unwrap();
    harness.click_node(NodeId(1)).unwrap();
    harness.assert_screen_contains(&label(4));

    harness.click_node(NodeId(0)).unwrap();
    harness.click_node(NodeId(0)).unwrap();

    harness.assert_screen_contains(&label(2));
    harness.assert_screen_not_contains(&label(4));
}

#[test]
fn test_expanded_leaf_draws_no_child_row() {
    let mut harness = ViewerTestHarness::new(small_tree(), 80, 24).unwrap();
    harness.render().unwrap();
    harness.click_node(NodeId(0)).unwrap();
    harness.click_node(NodeId(1)).unwrap();
    let before = harness.viewer().diagram_layout().placements().len();

    harness.click_node(NodeId(2)).unwrap();

    assert!(harness.viewer().view().is_expanded(NodeId(2)));
    assert_eq!(harness.viewer().diagram_layout().placements().len(), before);
    harness.assert_screen_contains(&label(4));
}

#[test]
fn test_click_on_empty_canvas_changes_nothing() {
    let mut harness = ViewerTestHarness::new(small_tree(), 80, 24).unwrap();
    harness.render().unwrap();
    let before = harness.screen_to_string();

    harness.click(70, 20).unwrap();
    harness.click(0, 0).unwrap();

    assert_eq!(harness.screen_to_string(), before);
    assert!(harness
        .viewer()
        .view()
        .all_nodes()
        .all(|n| n.is_collapsed()));
}

#[test]
fn test_keyboard_toggle() {
    let mut harness = ViewerTestHarness::new(small_tree(), 80, 24).unwrap();
    harness.render().unwrap();

    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness.assert_screen_contains(&label(2));

    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Char(' '), KeyModifiers::NONE).unwrap();
    harness.assert_screen_contains(&label(6));
    harness.assert_screen_not_contains(&label(4));
}

#[test]
fn test_quit() {
    let mut harness = ViewerTestHarness::new(small_tree(), 80, 24).unwrap();
    harness.render().unwrap();
    assert!(!harness.should_quit());

    harness.send_key(KeyCode::Char('q'), KeyModifiers::NONE).unwrap();
    assert!(harness.should_quit());
}
