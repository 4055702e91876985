use serde::{Serialize, Serializer};
use serde_json::Value;

/// One table cell.
///
/// Nested containers are never serialized into a cell; they appear as the
/// `Object`/`Array` sentinels. `Missing` marks a column the row has no key
/// for, and renders as the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Object,
    Array,
    Missing,
}

impl Cell {
    pub fn as_str(&self) -> &str {
        match self {
            Cell::Text(s) => s,
            Cell::Object => "{...}",
            Cell::Array => "[...]",
            Cell::Missing => "",
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Flat tabular projection of a parsed value.
///
/// Recomputed fully from the input on every call; for the same input the
/// column and row order are stable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TableProjection {
    /// The input was an empty array: an explicit empty table, not an error.
    Empty,
    /// Array of objects: one column per key, in first-seen order across all
    /// rows. Each row holds one [`Cell`] per column.
    Records {
        columns: Vec<String>,
        rows: Vec<Vec<Cell>>,
    },
    /// Array of non-objects: a single synthetic value column. The row index
    /// is positional.
    Values { items: Vec<Cell> },
    /// A top-level object: two-column key/value projection.
    KeyValue { entries: Vec<(String, Cell)> },
    /// A bare primitive: scalar display, not a table.
    Scalar { text: String },
}

/// Projects a parsed value into rows and inferred columns.
pub fn project(value: &Value) -> TableProjection {
    match value {
        Value::Array(items) if items.is_empty() => TableProjection::Empty,
        Value::Array(items) => {
            // The first element decides the projection shape.
            if matches!(items.first(), Some(Value::Object(_))) {
                project_records(items)
            } else {
                TableProjection::Values {
                    items: items.iter().map(element_cell).collect(),
                }
            }
        }
        Value::Object(map) => TableProjection::KeyValue {
            entries: map
                .iter()
                .map(|(k, v)| (k.clone(), field_cell(v)))
                .collect(),
        },
        other => TableProjection::Scalar { text: scalar_text(other) },
    }
}

fn project_records(items: &[Value]) -> TableProjection {
    let mut columns: Vec<String> = Vec::new();
    for item in items {
        if let Value::Object(map) = item {
            for key in map.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
    }

    let rows = items
        .iter()
        .map(|item| {
            columns
                .iter()
                .map(|column| match item {
                    Value::Object(map) => map.get(column).map(field_cell).unwrap_or(Cell::Missing),
                    _ => Cell::Missing,
                })
                .collect()
        })
        .collect();

    TableProjection::Records { columns, rows }
}

// Cell for a value sitting under a key. Null renders empty here, the same
// as a missing key.
fn field_cell(value: &Value) -> Cell {
    match value {
        Value::Null => Cell::Text(String::new()),
        Value::String(s) => Cell::Text(s.clone()),
        Value::Number(n) => Cell::Text(n.to_string()),
        Value::Bool(b) => Cell::Text(b.to_string()),
        Value::Array(_) => Cell::Array,
        Value::Object(_) => Cell::Object,
    }
}

// Cell for an element of a plain-values array. Null stringifies as "null"
// in this view.
fn element_cell(value: &Value) -> Cell {
    match value {
        Value::Null => Cell::Text("null".to_string()),
        other => field_cell(other),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
