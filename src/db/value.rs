//! Bind values and displayable result cells.

use std::fmt;

use rusqlite::types::{ToSql, ToSqlOutput, Value, ValueRef};
use rusqlite::Row;
use serde::Serialize;

/// A value bound to a statement placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Null,
    Integer(i64),
    Text(String),
}

impl SqlParam {
    /// Bind `Some` as text and `None` as NULL.
    pub fn text_or_null(value: Option<&str>) -> Self {
        match value {
            Some(text) => Self::Text(text.to_string()),
            None => Self::Null,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Integer(_) => "integer",
            Self::Text(_) => "text",
        }
    }
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Option<String>> for SqlParam {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Null, Self::Text)
    }
}

impl ToSql for SqlParam {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Self::Null => ToSqlOutput::Owned(Value::Null),
            Self::Integer(i) => ToSqlOutput::Owned(Value::Integer(*i)),
            Self::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
        })
    }
}

/// Render a raw SQLite cell as text, `None` for NULL.
pub fn display_value(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) => Some(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Some(format!("<{} bytes>", b.len())),
    }
}

/// One result row captured as column name / display value pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordRow {
    pub columns: Vec<(String, Option<String>)>,
}

impl RecordRow {
    /// Capture every column of `row`, labelled with `names`.
    pub fn capture(row: &Row<'_>, names: &[String]) -> rusqlite::Result<Self> {
        let mut columns = Vec::with_capacity(names.len());
        for (idx, name) in names.iter().enumerate() {
            columns.push((name.clone(), display_value(row.get_ref(idx)?)));
        }
        Ok(Self { columns })
    }

    /// Display value of the named column, if present and not NULL.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(col, _)| col == name)
            .and_then(|(_, value)| value.as_deref())
    }
}

impl fmt::Display for RecordRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.columns {
            writeln!(f, "{} : {}", name, value.as_deref().unwrap_or("NULL"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_option_maps_to_null() {
        assert_eq!(SqlParam::from(None::<String>), SqlParam::Null);
        assert_eq!(
            SqlParam::from(Some("x".to_string())),
            SqlParam::Text("x".to_string())
        );
        assert_eq!(SqlParam::text_or_null(None), SqlParam::Null);
    }

    #[rstest]
    #[case(SqlParam::Null, "null")]
    #[case(SqlParam::Integer(3), "integer")]
    #[case(SqlParam::Text("a".into()), "text")]
    fn test_type_name(#[case] param: SqlParam, #[case] expected: &str) {
        assert_eq!(param.type_name(), expected);
    }

    #[rstest]
    fn test_display_value() {
        assert_eq!(display_value(ValueRef::Null), None);
        assert_eq!(display_value(ValueRef::Integer(7)), Some("7".to_string()));
        assert_eq!(display_value(ValueRef::Text(b"abc")), Some("abc".to_string()));
        assert_eq!(display_value(ValueRef::Blob(&[1, 2])), Some("<2 bytes>".to_string()));
    }

    #[rstest]
    fn test_record_row_display_prints_null() {
        let row = RecordRow {
            columns: vec![
                ("Customer_ID".to_string(), Some("1".to_string())),
                ("First_Name".to_string(), None),
            ],
        };
        assert_eq!(row.to_string(), "Customer_ID : 1\nFirst_Name : NULL\n");
        assert_eq!(row.get("Customer_ID"), Some("1"));
        assert_eq!(row.get("First_Name"), None);
    }
}
