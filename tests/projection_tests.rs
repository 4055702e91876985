use serde_json::json;

use refmt::table::{self, Cell, TableProjection};
use refmt::tree;

#[test]
fn empty_array_projects_as_explicit_empty_table() {
    assert_eq!(table::project(&json!([])), TableProjection::Empty);
}

#[test]
fn record_columns_are_the_union_of_keys_in_first_seen_order() {
    let value = json!([{"a": 1}, {"b": 2}]);
    match table::project(&value) {
        TableProjection::Records { columns, rows } => {
            assert_eq!(columns, vec!["a", "b"]);
            assert_eq!(rows.len(), 2);
            // Missing keys render as empty cells, not errors.
            assert_eq!(rows[0], vec![Cell::Text("1".into()), Cell::Missing]);
            assert_eq!(rows[1], vec![Cell::Missing, Cell::Text("2".into())]);
        }
        other => panic!("expected records, got {:?}", other),
    }
}

#[test]
fn record_column_order_follows_first_appearance_not_alphabet() {
    let value = json!([{"z": 1, "m": 2}, {"a": 3, "z": 4}]);
    match table::project(&value) {
        TableProjection::Records { columns, .. } => {
            assert_eq!(columns, vec!["z", "m", "a"]);
        }
        other => panic!("expected records, got {:?}", other),
    }
}

#[test]
fn nested_values_become_shape_sentinels_never_serializations() {
    let value = json!([{"obj": {"x": 1}, "arr": [1, 2], "plain": "v"}]);
    match table::project(&value) {
        TableProjection::Records { rows, .. } => {
            assert_eq!(
                rows[0],
                vec![Cell::Object, Cell::Array, Cell::Text("v".into())]
            );
            assert_eq!(Cell::Object.as_str(), "{...}");
            assert_eq!(Cell::Array.as_str(), "[...]");
        }
        other => panic!("expected records, got {:?}", other),
    }
}

#[test]
fn null_record_fields_render_like_missing_cells() {
    let value = json!([{"a": null}]);
    match table::project(&value) {
        TableProjection::Records { rows, .. } => {
            assert_eq!(rows[0][0].as_str(), "");
        }
        other => panic!("expected records, got {:?}", other),
    }
}

#[test]
fn primitive_arrays_project_as_a_single_value_column() {
    let value = json!([1, "two", true, null]);
    match table::project(&value) {
        TableProjection::Values { items } => {
            assert_eq!(
                items,
                vec![
                    Cell::Text("1".into()),
                    Cell::Text("two".into()),
                    Cell::Text("true".into()),
                    Cell::Text("null".into()),
                ]
            );
        }
        other => panic!("expected values, got {:?}", other),
    }
}

#[test]
fn top_level_objects_project_as_key_value_pairs() {
    let value = json!({"name": "Ada", "meta": {"x": 1}, "tags": [1]});
    match table::project(&value) {
        TableProjection::KeyValue { entries } => {
            assert_eq!(
                entries,
                vec![
                    ("name".to_string(), Cell::Text("Ada".into())),
                    ("meta".to_string(), Cell::Object),
                    ("tags".to_string(), Cell::Array),
                ]
            );
        }
        other => panic!("expected key/value, got {:?}", other),
    }
}

#[test]
fn bare_primitives_fall_back_to_scalar_display() {
    assert_eq!(
        table::project(&json!(42)),
        TableProjection::Scalar { text: "42".into() }
    );
    assert_eq!(
        table::project(&json!("hi")),
        TableProjection::Scalar { text: "hi".into() }
    );
    assert_eq!(
        table::project(&json!(null)),
        TableProjection::Scalar { text: "null".into() }
    );
}

#[test]
fn projection_is_deterministic() {
    let value = json!([{"b": 1, "a": 2}, {"c": 3}]);
    assert_eq!(table::project(&value), table::project(&value));
}

#[test]
fn tree_roots_and_first_level_start_expanded() {
    let value = json!({"a": {"b": {"c": 1}}});
    let root = tree::project(&value);
    assert!(root.expanded);
    assert_eq!(root.depth, 0);

    let level1 = root.children();
    assert!(level1[0].expanded);

    let level2 = level1[0].children();
    assert!(!level2[0].expanded, "depth 2 starts collapsed");
}

#[test]
fn tree_labels_are_keys_and_stringified_indices() {
    let value = json!({"items": [10, 20]});
    let root = tree::project(&value);

    let children = root.children();
    assert_eq!(children[0].label.as_deref(), Some("items"));

    let items = children[0].children();
    assert_eq!(items[0].label.as_deref(), Some("0"));
    assert_eq!(items[1].label.as_deref(), Some("1"));
}

#[test]
fn tree_summaries_follow_the_rendering_policy() {
    assert_eq!(tree::project(&json!(null)).summary(), "null");
    assert_eq!(tree::project(&json!("hi")).summary(), "\"hi\"");
    assert_eq!(tree::project(&json!(1.5)).summary(), "1.5");
    assert_eq!(tree::project(&json!(true)).summary(), "true");
    assert_eq!(tree::project(&json!([])).summary(), "[]");
    assert_eq!(tree::project(&json!({})).summary(), "{}");
    assert_eq!(tree::project(&json!([1, 2, 3])).summary(), "Array [3]");
    assert_eq!(tree::project(&json!({"a": 1, "b": 2})).summary(), "Object {2}");
}

#[test]
fn only_non_empty_containers_are_expandable() {
    assert!(tree::project(&json!([1])).is_expandable());
    assert!(tree::project(&json!({"a": 1})).is_expandable());
    assert!(!tree::project(&json!([])).is_expandable());
    assert!(!tree::project(&json!({})).is_expandable());
    assert!(!tree::project(&json!("leaf")).is_expandable());
}

#[test]
fn toggling_one_node_leaves_siblings_untouched() {
    let value = json!({"left": {"x": 1}, "right": {"y": 2}});
    let root = tree::project(&value);
    let mut children = root.children();

    let sibling_state = children[1].expanded;
    children[0].toggle();
    assert!(!children[0].expanded);
    assert_eq!(children[1].expanded, sibling_state);

    // Toggling a leaf is a no-op.
    let leaf_value = json!(1);
    let mut leaf = tree::project(&leaf_value);
    leaf.toggle();
    assert!(leaf.expanded, "leaf expansion state is inert");
}

#[test]
fn deep_nesting_projects_without_overflow() {
    let mut value = json!(1);
    for _ in 0..150 {
        value = json!([value]);
    }

    let root = tree::project(&value);
    let mut node = root.clone();
    let mut depth = 0;
    loop {
        let children = node.children();
        match children.into_iter().next() {
            Some(child) => {
                depth = child.depth;
                node = child;
            }
            None => break,
        }
    }
    assert_eq!(depth, 150);
    assert_eq!(node.summary(), "1");
}
