//! Turning engine rows into connector result shapes.

use crate::errors::{CODE_BAD_COLUMN, ConnError, ConnResult};
use crate::models::row::Row;
use crate::models::value::Value;
use indexmap::IndexMap;
use rusqlite::types::Value as SqlValue;

pub fn map_row(row: &rusqlite::Row, columns: &[String]) -> rusqlite::Result<Row> {
    let mut out = Row::new();
    for (idx, name) in columns.iter().enumerate() {
        let v: SqlValue = row.get(idx)?;
        out.insert(name.as_str(), Value::from(v));
    }
    Ok(out)
}

/// First column of the first row.
pub fn scalar(rows: Vec<Row>) -> Option<Value> {
    rows.into_iter()
        .next()
        .and_then(|row| row.into_iter().next().map(|(_, v)| v))
}

/// Reshape a two-column result into `key column value → other column value`.
///
/// Returns `Ok(None)` when there are no rows or the first row has no
/// `key_column`. Results wider than two columns are rejected; a single-column
/// result gives an empty mapping.
/// Duplicate keys: the later row wins.
pub fn key_value_pairs(
    rows: Vec<Row>,
    key_column: &str,
) -> ConnResult<Option<IndexMap<String, Value>>> {
    let Some(first) = rows.first() else {
        return Ok(None);
    };
    if !first.contains(key_column) {
        return Ok(None);
    }
    if first.len() > 2 {
        return Err(ConnError::invalid(
            CODE_BAD_COLUMN,
            format!(
                "key/value reshaping needs at most two columns, got {}",
                first.len()
            ),
        ));
    }

    let mut out = IndexMap::with_capacity(rows.len());
    for row in rows {
        let mut key = None;
        let mut value = None;
        for (column, v) in row {
            if column == key_column {
                key = Some(v.to_string());
            } else {
                value = Some(v);
            }
        }
        if let (Some(k), Some(v)) = (key, value) {
            out.insert(k, v);
        }
    }
    Ok(Some(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn kv(k: &str, v: &str) -> Row {
        Row::new().with("k", k).with("v", v)
    }

    #[test]
    fn scalar_takes_first_cell() {
        let rows = vec![Row::new().with("n", 3i64).with("m", 4i64), Row::new().with("n", 9i64)];
        assert_eq!(scalar(rows), Some(Value::Integer(3)));
        assert_eq!(scalar(Vec::new()), None);
    }

    #[test]
    fn pairs_map_key_to_other_column() {
        let map = key_value_pairs(vec![kv("a", "1"), kv("b", "2")], "k")
            .unwrap()
            .unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"], Value::from("1"));
        assert_eq!(map["b"], Value::from("2"));
    }

    #[test]
    fn pairs_key_may_be_second_column() {
        let map = key_value_pairs(vec![kv("a", "1")], "v").unwrap().unwrap();
        assert_eq!(map["1"], Value::from("a"));
    }

    #[test]
    fn duplicate_keys_last_wins() {
        let map = key_value_pairs(vec![kv("a", "1"), kv("a", "2")], "k")
            .unwrap()
            .unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["a"], Value::from("2"));
    }

    #[test]
    fn pairs_missing_column_or_empty_is_none() {
        assert_eq!(key_value_pairs(Vec::new(), "k").unwrap(), None);
        assert_eq!(key_value_pairs(vec![kv("a", "1")], "zzz").unwrap(), None);
    }

    #[test]
    fn single_column_gives_empty_mapping() {
        let rows = vec![Row::new().with("k", "a"), Row::new().with("k", "b")];
        let map = key_value_pairs(rows, "k").unwrap().unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn pairs_reject_wide_results() {
        let wide = Row::new().with("k", "a").with("v", "1").with("w", "x");
        let err = key_value_pairs(vec![wide], "k").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
