use serde_json::Value;

/// One node of the interactive tree projection.
///
/// Nodes borrow the parsed document; children are produced on demand by
/// [`TreeNode::children`], one level at a time, so projecting a deeply
/// nested document never recurses over the whole value.
#[derive(Debug, Clone)]
pub struct TreeNode<'a> {
    /// Object key or stringified array index; `None` at the root.
    pub label: Option<String>,
    pub value: &'a Value,
    pub depth: usize,
    /// Initial render state; each node carries its own flag, so toggling
    /// one never touches siblings or ancestors.
    pub expanded: bool,
}

/// Projects a parsed value as the root of a labeled tree.
pub fn project(value: &Value) -> TreeNode<'_> {
    TreeNode {
        label: None,
        value,
        depth: 0,
        expanded: default_expanded(0),
    }
}

// Roots and their direct children start expanded; everything deeper starts
// collapsed.
fn default_expanded(depth: usize) -> bool {
    depth < 2
}

impl<'a> TreeNode<'a> {
    /// A node can expand iff it is a non-empty object or array.
    pub fn is_expandable(&self) -> bool {
        match self.value {
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
            _ => false,
        }
    }

    pub fn toggle(&mut self) {
        if self.is_expandable() {
            self.expanded = !self.expanded;
        }
    }

    /// The node's one-line rendering: literal `null`, quoted strings,
    /// number/boolean literals, `[]`/`{}` for empty containers, and an
    /// element/key count summary for collapsed non-empty containers.
    pub fn summary(&self) -> String {
        match self.value {
            Value::Null => "null".to_string(),
            Value::String(s) => format!("\"{}\"", s),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Array(items) => {
                if items.is_empty() {
                    "[]".to_string()
                } else {
                    format!("Array [{}]", items.len())
                }
            }
            Value::Object(map) => {
                if map.is_empty() {
                    "{}".to_string()
                } else {
                    format!("Object {{{}}}", map.len())
                }
            }
        }
    }

    /// Produces the next level of the tree: one child per array element
    /// (labeled with its index) or object entry (labeled with its key).
    /// Leaves and empty containers have no children.
    pub fn children(&self) -> Vec<TreeNode<'a>> {
        let depth = self.depth + 1;
        match self.value {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, v)| TreeNode {
                    label: Some(i.to_string()),
                    value: v,
                    depth,
                    expanded: default_expanded(depth),
                })
                .collect(),
            Value::Object(map) => map
                .iter()
                .map(|(k, v)| TreeNode {
                    label: Some(k.clone()),
                    value: v,
                    depth,
                    expanded: default_expanded(depth),
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}
