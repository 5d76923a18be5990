use crate::common::fixtures::{label, node, small_tree, wide_tree};
use crate::common::harness::ViewerTestHarness;
use abtree::config::{ColorDef, Config};
use abtree::model::{SearchNode, Tree};
use abtree::view::tree::NodeId;
use ratatui::style::Color;

#[test]
fn test_shapes_and_colours() {
    let mut harness = ViewerTestHarness::new(small_tree(), 80, 24).unwrap();
    harness.render().unwrap();
    harness.click_node(NodeId(0)).unwrap();
    harness.click_node(NodeId(1)).unwrap();
    harness.click_node(NodeId(4)).unwrap();

    let expected = [
        (NodeId(0), "●", Color::Black),
        (NodeId(1), "■", Color::Black),
        (NodeId(2), "●", Color::Black),
        (NodeId(3), "●", Color::Red),
        (NodeId(4), "■", Color::Red),
        (NodeId(5), "●", Color::Black),
    ];

    for (id, glyph, color) in expected {
        let cell = harness.node_cell(id).unwrap();
        assert_eq!(cell.symbol(), glyph, "{id}");
        assert_eq!(cell.fg, color, "{id}");
    }
}

#[test]
fn test_label_format() {
    let tree = Tree::new(SearchNode::new(5, 3, 7, true, false));
    let mut harness = ViewerTestHarness::new(tree, 40, 8).unwrap();
    harness.render().unwrap();

    harness.assert_screen_contains("[3,7] --- 5");
}

#[test]
fn test_label_sits_under_shape() {
    let mut harness = ViewerTestHarness::new(small_tree(), 80, 24).unwrap();
    harness.render().unwrap();

    let (shape_col, shape_row) = harness.viewer().node_position(NodeId(0)).unwrap();
    let (label_col, label_row) = harness.find_text(&label(1)).unwrap();
    assert_eq!(label_row, shape_row + 1);
    assert!(label_col <= shape_col && shape_col < label_col + 11);
}

#[test]
fn test_children_left_to_right() {
    let mut harness = ViewerTestHarness::new(wide_tree(5), 80, 24).unwrap();
    harness.render().unwrap();
    harness.click_node(NodeId(0)).unwrap();

    let positions: Vec<(u16, u16)> = (10..15)
        .map(|h| harness.find_text(&label(h)).unwrap())
        .collect();

    assert!(positions.windows(2).all(|w| w[0].1 == w[1].1), "one row");
    assert!(
        positions.windows(2).all(|w| w[0].0 < w[1].0),
        "tree order: {positions:?}"
    );
}

#[test]
fn test_child_row_below_parent() {
    let mut harness = ViewerTestHarness::new(small_tree(), 80, 24).unwrap();
    harness.render().unwrap();
    harness.click_node(NodeId(0)).unwrap();

    let (_, root_row) = harness.find_text(&label(1)).unwrap();
    let (_, child_row) = harness.find_text(&label(2)).unwrap();
    assert!(child_row > root_row);
    assert_eq!(harness.find_text(&label(3)).unwrap().1, child_row);
}

#[test]
fn test_status_bar() {
    let mut harness =
        ViewerTestHarness::with_config(small_tree(), Config::default(), 100, 24).unwrap();
    harness.render().unwrap();
    harness.click_node(NodeId(0)).unwrap();

    let status = harness.screen_row(23);
    assert!(status.contains("test.json"), "{status}");
    assert!(status.contains("3/6 nodes"), "{status}");
    assert!(status.contains("root"), "{status}");
}

#[test]
fn test_custom_pruned_colour() {
    let mut config = Config::default();
    config.view.status_bar = false;
    config.theme.pruned = ColorDef::Rgb(200, 30, 30);
    let tree = Tree::new(node(1, false, true));

    let mut harness = ViewerTestHarness::with_config(tree, config, 40, 8).unwrap();
    harness.render().unwrap();

    let cell = harness.node_cell(NodeId(0)).unwrap();
    assert_eq!(cell.symbol(), "■");
    assert_eq!(cell.fg, Color::Rgb(200, 30, 30));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut harness = ViewerTestHarness::new(small_tree(), 6, 3).unwrap();
    harness.render().unwrap();
    harness.click(2, 1).unwrap();
    harness.render().unwrap();
}
