//! Table rendering from serializable records.
//!
//! This is the programmatic counterpart to building rows by hand: column
//! names are looked up as fields in each record's serialized form, so a
//! slice of structs can be rendered directly.

use serde::Serialize;
use serde_json::Value;

use super::types::Table;
use crate::error::RenderError;

/// Render a table showing the named fields of each record.
///
/// The column names double as the table headers and as the field names
/// extracted from each record through its `Serialize` implementation.
/// Extracted values are stringified as follows: strings as-is, numbers and
/// booleans in their canonical text form, null as an empty string, arrays
/// and objects as compact JSON.
///
/// A record that does not serialize to an object fails with
/// [`RenderError::SerializationError`]; a record lacking one of the named
/// fields fails with [`RenderError::MissingField`].
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use rstout::table_from;
///
/// #[derive(Serialize)]
/// struct City {
///     name: String,
///     country: String,
/// }
///
/// let rows = vec![
///     City { name: "Eupen".into(), country: "Belgium".into() },
///     City { name: "Vigala".into(), country: "Estonia".into() },
/// ];
///
/// let out = table_from(&["name", "country"], &rows).unwrap();
/// assert!(out.contains("Eupen"));
/// assert!(out.contains("country"));
/// ```
pub fn table_from<T: Serialize>(columns: &[&str], records: &[T]) -> Result<String, RenderError> {
    let mut rows = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let value = serde_json::to_value(record)?;
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(RenderError::SerializationError(format!(
                    "record {} is not an object: {}",
                    i, other
                )))
            }
        };
        let mut cells = Vec::with_capacity(columns.len());
        for column in columns {
            let field = map.get(*column).ok_or_else(|| RenderError::MissingField {
                row: i,
                field: (*column).to_string(),
            })?;
            cells.push(stringify(field));
        }
        rows.push(cells);
    }
    Table::new(columns.iter().copied()).to_rst(&rows)
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Task {
        id: u32,
        title: String,
        done: bool,
    }

    #[test]
    fn renders_named_fields_in_column_order() {
        let tasks = vec![
            Task {
                id: 1,
                title: "write docs".into(),
                done: false,
            },
            Task {
                id: 2,
                title: "ship".into(),
                done: true,
            },
        ];

        let out = table_from(&["id", "title", "done"], &tasks).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].contains("id"));
        assert!(lines[3].contains("write docs"));
        assert!(lines[4].contains("true"));
    }

    #[test]
    fn null_field_renders_empty() {
        #[derive(Serialize)]
        struct Entry {
            name: String,
            note: Option<String>,
        }

        let out = table_from(
            &["name", "note"],
            &[Entry {
                name: "a".into(),
                note: None,
            }],
        )
        .unwrap();
        assert!(out.contains("name"));
        assert!(out.contains(" a"));
    }

    #[test]
    fn missing_field_fails_fast() {
        let tasks = vec![Task {
            id: 1,
            title: "x".into(),
            done: false,
        }];
        let err = table_from(&["id", "owner"], &tasks).unwrap_err();
        match err {
            RenderError::MissingField { row, field } => {
                assert_eq!(row, 0);
                assert_eq!(field, "owner");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn non_object_record_is_rejected() {
        let err = table_from(&["value"], &[1, 2, 3]).unwrap_err();
        assert!(matches!(err, RenderError::SerializationError(_)));
    }

    #[test]
    fn no_records_render_two_blank_lines() {
        let out = table_from::<Task>(&["id"], &[]).unwrap();
        assert_eq!(out, "\n\n");
    }

    #[test]
    fn stringify_contract() {
        assert_eq!(stringify(&Value::Null), "");
        assert_eq!(stringify(&serde_json::json!("s")), "s");
        assert_eq!(stringify(&serde_json::json!(3)), "3");
        assert_eq!(stringify(&serde_json::json!(true)), "true");
        assert_eq!(stringify(&serde_json::json!([1, 2])), "[1,2]");
    }
}
