// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashMap;

use crate::errors::EncodeError;
use crate::table::ColumnDescriptor;

/// A single input record: an open-ended map from field key to a scalar value.
///
/// Rows deserialize directly from JSON objects. Missing keys and `null`
/// values both render as an empty cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(pub HashMap<String, Value>);

impl Row {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Builder-style insert, mostly useful in tests and demos.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Coerce the value stored under `key` to its cell text.
    ///
    /// `row_index` is only used to locate the failure when the value is not a
    /// scalar (arrays and objects have no cell representation).
    pub fn cell(&self, row_index: usize, key: &str) -> Result<Cow<'_, str>, EncodeError> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(Cow::Borrowed("")),
            Some(Value::String(text)) => Ok(Cow::Borrowed(text.as_str())),
            Some(Value::Number(number)) => Ok(Cow::Owned(number.to_string())),
            Some(Value::Bool(true)) => Ok(Cow::Borrowed("true")),
            Some(Value::Bool(false)) => Ok(Cow::Borrowed("false")),
            Some(Value::Array(_)) => Err(EncodeError::UnsupportedValue {
                row: row_index,
                key: key.to_string(),
                kind: "array",
            }),
            Some(Value::Object(_)) => Err(EncodeError::UnsupportedValue {
                row: row_index,
                key: key.to_string(),
                kind: "object",
            }),
        }
    }

    /// All cells of this row in column-descriptor order.
    pub fn cells<'a>(
        &'a self,
        row_index: usize,
        columns: &[ColumnDescriptor],
    ) -> Result<Vec<Cow<'a, str>>, EncodeError> {
        columns
            .iter()
            .map(|column| self.cell(row_index, &column.key))
            .collect()
    }
}

impl From<HashMap<String, Value>> for Row {
    fn from(map: HashMap<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_cells_coerce_to_text() {
        let row = Row::new()
            .with("name", "Ada")
            .with("amount", 5)
            .with("ratio", 2.5)
            .with("active", true)
            .with("note", Value::Null);

        assert_eq!(row.cell(0, "name").unwrap(), "Ada");
        assert_eq!(row.cell(0, "amount").unwrap(), "5");
        assert_eq!(row.cell(0, "ratio").unwrap(), "2.5");
        assert_eq!(row.cell(0, "active").unwrap(), "true");
        assert_eq!(row.cell(0, "note").unwrap(), "");
    }

    #[test]
    fn test_missing_key_is_empty_cell() {
        let row = Row::new().with("name", "Ada");
        assert_eq!(row.cell(3, "department").unwrap(), "");
    }

    #[test]
    fn test_nested_values_are_rejected_with_location() {
        let row: Row = serde_json::from_value(json!({ "tags": ["a", "b"] })).unwrap();

        let error = row.cell(7, "tags").unwrap_err();
        assert_eq!(
            error,
            EncodeError::UnsupportedValue {
                row: 7,
                key: "tags".to_string(),
                kind: "array",
            }
        );
    }

    #[test]
    fn test_cells_follow_column_order() {
        let row = Row::new().with("b", "second").with("a", "first");
        let columns = vec![
            ColumnDescriptor::new("a", "A"),
            ColumnDescriptor::new("b", "B"),
        ];

        let cells = row.cells(0, &columns).unwrap();
        assert_eq!(cells, vec!["first", "second"]);
    }

    #[test]
    fn test_row_deserializes_from_json_object() {
        let row: Row =
            serde_json::from_str(r#"{"college":"Engineering","seats":120}"#).unwrap();
        assert_eq!(row.get("college"), Some(&json!("Engineering")));
        assert_eq!(row.get("seats"), Some(&json!(120)));
    }
}
