//! Column-name → value rows returned by the generic query operations.

use rusqlite::Row;
use rusqlite::types::Value;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// One result row. Columns keep the order the query produced them in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultRow {
    columns: Vec<(String, Value)>,
}

impl ResultRow {
    /// Build a row from a rusqlite row, given the statement's column names.
    pub fn from_row(columns: &[String], row: &Row) -> rusqlite::Result<Self> {
        let mut out = Vec::with_capacity(columns.len());
        for (i, name) in columns.iter().enumerate() {
            let value = Value::from(row.get_ref(i)?);
            out.push((name.clone(), value));
        }
        Ok(Self { columns: out })
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, v)| v)
    }

    pub fn get_text(&self, column: &str) -> Option<&str> {
        match self.get(column)? {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn get_i64(&self, column: &str) -> Option<i64> {
        match self.get(column)? {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Serialize for ResultRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in &self.columns {
            match value {
                Value::Null => map.serialize_entry(name, &())?,
                Value::Integer(n) => map.serialize_entry(name, n)?,
                Value::Real(x) => map.serialize_entry(name, x)?,
                Value::Text(s) => map.serialize_entry(name, s)?,
                Value::Blob(b) => map.serialize_entry(name, b)?,
            }
        }
        map.end()
    }
}
