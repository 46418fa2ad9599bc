//! `SELECT COUNT` helpers used for existence and relationship checks.

use rusqlite::Connection;

use super::executor::query_first;
use super::sql::{Column, Table};
use super::value::SqlParam;
use super::DbError;

/// `SELECT COUNT(column) FROM table`.
pub fn count(conn: &Connection, table: Table, column: Column) -> Result<i64, DbError> {
    let sql = format!("SELECT COUNT({}) FROM {};", column.as_str(), table.as_str());
    count_with(conn, &sql, &[])
}

/// `SELECT COUNT(column) FROM table WHERE condition = ?` with `value` bound.
pub fn count_where(
    conn: &Connection,
    table: Table,
    column: Column,
    condition: Column,
    value: impl Into<SqlParam>,
) -> Result<i64, DbError> {
    let sql = format!(
        "SELECT COUNT({}) FROM {} WHERE {} = ?;",
        column.as_str(),
        table.as_str(),
        condition.as_str()
    );
    count_with(conn, &sql, &[value.into()])
}

fn count_with(conn: &Connection, sql: &str, params: &[SqlParam]) -> Result<i64, DbError> {
    query_first(conn, sql, params, |row| row.get::<_, i64>(0))?
        .ok_or_else(|| DbError::NoRow { sql: sql.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{insert_address, insert_customer, test_db};
    use rstest::rstest;

    #[rstest]
    fn test_count_empty_tables() {
        let conn = test_db();
        assert_eq!(count(&conn, Table::Customers, Column::All).unwrap(), 0);
        assert_eq!(count(&conn, Table::Addresses, Column::All).unwrap(), 0);
    }

    #[rstest]
    fn test_count_where_by_short_name() {
        let conn = test_db();
        insert_customer(&conn, "JDOE");
        insert_customer(&conn, "ASMITH");

        let hits = count_where(&conn, Table::Customers, Column::All, Column::ShortName, "JDOE").unwrap();
        assert_eq!(hits, 1);
        let misses = count_where(&conn, Table::Customers, Column::All, Column::ShortName, "NOBODY").unwrap();
        assert_eq!(misses, 0);
    }

    #[rstest]
    fn test_count_where_by_customer_id() {
        let conn = test_db();
        let id = insert_customer(&conn, "JDOE");
        insert_address(&conn, "JDOE", "1 Regent Road");
        insert_address(&conn, "JDOE", "26 Lombard Street");

        let n = count_where(&conn, Table::Addresses, Column::All, Column::CustomerId, id).unwrap();
        assert_eq!(n, 2);
    }

    #[rstest]
    fn test_count_is_idempotent_without_writes() {
        let conn = test_db();
        insert_customer(&conn, "JDOE");
        let first = count(&conn, Table::Customers, Column::All).unwrap();
        let second = count(&conn, Table::Customers, Column::All).unwrap();
        assert_eq!(first, second);
    }

    #[rstest]
    fn test_count_on_missing_table_is_an_error() {
        let conn = Connection::open_in_memory().unwrap();
        let err = count(&conn, Table::Customers, Column::All).unwrap_err();
        assert_eq!(err.stage(), "prepare");
    }
}
