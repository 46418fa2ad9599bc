//! Statement execution.
//!
//! Two paths exist. The parameterized path takes statement text with `?`
//! placeholders and a slice of [`SqlParam`] values and reports which stage
//! failed. The trusted path takes a [`TrustedSql`] and binds nothing.

use rusqlite::{Connection, Row, Statement};
use tracing::{debug, warn};

use super::sql::TrustedSql;
use super::value::{RecordRow, SqlParam};
use super::DbError;

fn prepare<'c>(conn: &'c Connection, sql: &str) -> Result<Statement<'c>, DbError> {
    conn.prepare(sql).map_err(|e| {
        warn!(sql, error = %e, "prepare failed");
        DbError::prepare(sql, e)
    })
}

fn bind_all(stmt: &mut Statement<'_>, sql: &str, params: &[SqlParam]) -> Result<(), DbError> {
    let expected = stmt.parameter_count();
    if expected != params.len() {
        warn!(sql, expected, actual = params.len(), "placeholder count mismatch");
        return Err(DbError::BindCount {
            sql: sql.to_string(),
            expected,
            actual: params.len(),
        });
    }

    for (offset, param) in params.iter().enumerate() {
        let index = offset + 1;
        stmt.raw_bind_parameter(index, param).map_err(|e| {
            warn!(sql, index, kind = param.type_name(), error = %e, "bind failed");
            DbError::Bind {
                sql: sql.to_string(),
                index,
                message: e.to_string(),
            }
        })?;
    }
    Ok(())
}

/// Prepare, bind, and step a statement that returns no rows.
///
/// Returns the number of rows changed.
pub fn execute_params(conn: &Connection, sql: &str, params: &[SqlParam]) -> Result<usize, DbError> {
    debug!(sql, params = params.len(), "execute");
    let mut stmt = prepare(conn, sql)?;
    bind_all(&mut stmt, sql, params)?;
    stmt.raw_execute().map_err(|e| {
        warn!(sql, error = %e, "step failed");
        DbError::step(sql, e)
    })
}

/// Prepare, bind, and collect every row through `map`.
pub fn query_params<T, F>(
    conn: &Connection,
    sql: &str,
    params: &[SqlParam],
    mut map: F,
) -> Result<Vec<T>, DbError>
where
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    debug!(sql, params = params.len(), "query");
    let mut stmt = prepare(conn, sql)?;
    bind_all(&mut stmt, sql, params)?;

    let mut rows = stmt.raw_query();
    let mut results = Vec::new();
    while let Some(row) = rows.next().map_err(|e| DbError::step(sql, e))? {
        results.push(map(row).map_err(|e| DbError::step(sql, e))?);
    }
    Ok(results)
}

/// Like [`query_params`] but only the first row, `None` when there is none.
pub fn query_first<T, F>(
    conn: &Connection,
    sql: &str,
    params: &[SqlParam],
    map: F,
) -> Result<Option<T>, DbError>
where
    F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
{
    debug!(sql, params = params.len(), "query first");
    let mut stmt = prepare(conn, sql)?;
    bind_all(&mut stmt, sql, params)?;

    let mut rows = stmt.raw_query();
    match rows.next().map_err(|e| DbError::step(sql, e))? {
        Some(row) => map(row).map(Some).map_err(|e| DbError::step(sql, e)),
        None => Ok(None),
    }
}

/// Run trusted literal SQL, possibly several statements, discarding rows.
pub fn execute_trusted(conn: &Connection, sql: TrustedSql) -> Result<(), DbError> {
    debug!(sql = sql.as_str(), "execute trusted");
    conn.execute_batch(sql.as_str())
        .map_err(|e| DbError::step(sql.as_str(), e))
}

/// Run one trusted literal SELECT and capture every row for display.
pub fn query_trusted(conn: &Connection, sql: TrustedSql) -> Result<Vec<RecordRow>, DbError> {
    let text = sql.as_str();
    debug!(sql = text, "query trusted");
    let mut stmt = prepare(conn, text)?;
    let names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

    let mut rows = stmt.raw_query();
    let mut captured = Vec::new();
    while let Some(row) = rows.next().map_err(|e| DbError::step(text, e))? {
        captured.push(RecordRow::capture(row, &names).map_err(|e| DbError::step(text, e))?);
    }
    Ok(captured)
}
