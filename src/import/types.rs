// src/import/types.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One data line of the source file, keyed by header name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawRow {
    fields: HashMap<String, String>,
}

impl RawRow {
    /// Pair `headers` with `values` positionally. Columns past the end of a
    /// short row are left out; values past the last header are dropped.
    /// A repeated header keeps the value of its last occurrence.
    pub fn from_parts<H, V>(headers: H, values: V) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        let fields = headers
            .into_iter()
            .zip(values)
            .map(|(h, v)| (h.into(), v.into()))
            .collect();
        Self { fields }
    }

    /// Value of `column`, or `""` when the row has no such column.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }
}

/// A normalized record as written to `prompts.json`.
///
/// Field order here is the key order in the output.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct Prompt {
    pub id: String,
    pub title: String,
    pub school_type: String,
    pub subject: String,
    pub content: String,
    pub description: String,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_row_leaves_trailing_columns_empty() {
        let row = RawRow::from_parts(["id", "title", "school"], ["7", "Fractions"]);
        assert_eq!(row.get("id"), "7");
        assert_eq!(row.get("title"), "Fractions");
        assert_eq!(row.get("school"), "");
        assert_eq!(row.get("no_such_column"), "");
    }

    #[test]
    fn repeated_header_keeps_last_value() {
        let row = RawRow::from_parts(["id", "id"], ["first", "second"]);
        assert_eq!(row.get("id"), "second");
    }
}
