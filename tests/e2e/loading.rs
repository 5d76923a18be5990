use crate::common::fixtures::{chain_json, label, small_tree, small_tree_json, TestFixture};
use crate::common::harness::ViewerTestHarness;
use abtree::model::{LoadError, TreeLoader, TreeStats};
use abtree::view::tree::NodeId;
use crossterm::event::{KeyCode, KeyModifiers};

#[test]
fn test_load_file_and_view() {
    let fixture = TestFixture::new("tree.json", &small_tree_json()).unwrap();
    let tree = TreeLoader::new().load_file(&fixture.path).unwrap();
    assert_eq!(tree, small_tree());

    let mut harness = ViewerTestHarness::new(tree, 80, 24).unwrap();
    harness.render().unwrap();
    harness.assert_screen_contains("[1,1] --- 1");
}

#[test]
fn test_missing_file() {
    let fixture = TestFixture::new("tree.json", "{}").unwrap();
    let missing = fixture.path.with_file_name("nope.json");
    let err = TreeLoader::new().load_file(&missing).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("nope.json"));
}

const VAL: &str =
    r#""h_val": 1, "alpha": 0, "beta": 2, "mv": null, "is_max": true, "pruned": false"#;

fn leaf_document(val: &str) -> String {
    format!(r#"{{"val": {{{val}}}, "next": []}}"#)
}

#[test]
fn test_malformed_documents_fail_before_rendering() {
    let loader = TreeLoader::new();
    assert!(loader.load_str(&leaf_document(VAL)).is_ok());

    let cases = [
        "not json".to_string(),
        // Missing `next`
        format!(r#"{{"val": {{{VAL}}}}}"#),
        // Missing `val`
        r#"{"next": []}"#.to_string(),
        // Non-integer score
        leaf_document(&VAL.replace(r#""h_val": 1"#, r#""h_val": 1.5"#)),
        // Wrong type for a flag
        leaf_document(&VAL.replace(r#""is_max": true"#, r#""is_max": 1"#)),
    ];

    for text in &cases {
        let err = loader.load_str(text).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)), "{text}: {err}");
    }
}

#[test]
fn test_depth_limit() {
    let err = TreeLoader::new()
        .with_max_depth(2)
        .load_str(&small_tree_json())
        .unwrap_err();
    assert!(matches!(
        err,
        LoadError::TooDeep {
            depth: 3,
            max_depth: 2
        }
    ));
}

#[test]
fn test_deep_trees_load_without_a_limit() {
    for levels in [40, 80, 600] {
        let fixture = TestFixture::new("deep.json", &chain_json(levels)).unwrap();
        let tree = TreeLoader::new().load_file(&fixture.path).unwrap();
        assert_eq!(tree.depth(), levels);
    }
}

#[test]
fn test_deep_tree_expands_to_the_bottom() {
    let tree = TreeLoader::new().load_str(&chain_json(80)).unwrap();
    let mut harness = ViewerTestHarness::new(tree, 40, 12).unwrap();
    harness.render().unwrap();

    // Expand each level and step down to its only child
    for _ in 0..79 {
        harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
        harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    }

    assert_eq!(harness.viewer().view().selected(), NodeId(79));
    assert_eq!(harness.viewer().view().visible_count(), 80);
    harness.assert_screen_contains(&label(79));
    harness.assert_screen_not_contains(&label(0));
}

#[test]
fn test_null_children_are_skipped() {
    let text = r#"{
        "val": {"h_val": 0, "alpha": -5, "beta": 5, "mv": null, "is_max": true, "pruned": false},
        "next": [
            null,
            {"val": {"h_val": 2, "alpha": -5, "beta": 5, "mv": null, "is_max": false, "pruned": true}, "next": []}
        ]
    }"#;
    let tree = TreeLoader::new().load_str(text).unwrap();
    assert_eq!(tree.next.len(), 1);
    assert_eq!(tree.next[0].val.h_val, 2);
}

#[test]
fn test_bundled_tree() {
    let tree = TreeLoader::new().load_bundled().unwrap();
    let stats = TreeStats::collect(&tree);
    assert_eq!(stats.nodes, tree.node_count());
    assert!(stats.pruned > 0);
    assert!(tree.val.is_max);
}
