//! Operator-typed SQL, executed as-is.
//!
//! This path performs no parameterization and no validation. Whatever the
//! operator types runs against the database with full privileges, so it
//! is kept apart from the checked executor in `db` and shares no code with
//! its trusted-literal path.

use std::io::{BufRead, Write};

use rusqlite::{Batch, Connection, Statement};
use serde::Serialize;
use tracing::warn;

use super::view::print_rows;
use crate::console::Console;
use crate::db::{DbError, RecordRow};
use crate::workflows::WorkflowError;

const EXIT_WORD: &str = "EXIT";
const TOTAL_CHANGES: &str = "SELECT total_changes()";

/// What one statement of an unchecked batch produced.
#[derive(Debug, Clone, Serialize)]
pub struct RawOutcome {
    pub rows: Vec<RecordRow>,
    /// Rows inserted, updated or deleted. `None` for statements that return
    /// columns or cannot write.
    pub changes: Option<u64>,
}

/// Execute operator-supplied SQL without any checks.
///
/// Every statement in `sql` runs in order and yields one outcome. If a
/// statement fails, the ones before it stay applied.
pub fn execute_unchecked(conn: &Connection, sql: &str) -> Result<Vec<RawOutcome>, DbError> {
    warn!(sql, "executing unchecked SQL");
    let mut batch = Batch::new(conn, sql);
    let mut outcomes = Vec::new();
    while let Some(mut stmt) = batch.next().map_err(|e| DbError::prepare(sql, e))? {
        outcomes.push(run_statement(conn, &mut stmt, sql)?);
    }
    Ok(outcomes)
}

fn run_statement(conn: &Connection, stmt: &mut Statement<'_>, sql: &str) -> Result<RawOutcome, DbError> {
    let names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let writes = names.is_empty() && !stmt.readonly();
    let before = if writes { total_changes(conn)? } else { 0 };

    let mut rows = Vec::new();
    let mut cursor = stmt.raw_query();
    while let Some(row) = cursor.next().map_err(|e| DbError::step(sql, e))? {
        rows.push(RecordRow::capture(row, &names).map_err(|e| DbError::step(sql, e))?);
    }

    // total_changes() only moves for row writes, so schema statements read 0.
    let changes = if writes {
        Some(total_changes(conn)?.saturating_sub(before))
    } else {
        None
    };
    Ok(RawOutcome { rows, changes })
}

fn total_changes(conn: &Connection) -> Result<u64, DbError> {
    conn.query_row(TOTAL_CHANGES, [], |row| row.get::<_, i64>(0))
        .map(|n| n.max(0) as u64)
        .map_err(|e| DbError::step(TOTAL_CHANGES, e))
}

pub(super) fn run<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<(), WorkflowError> {
    console.say(
        "Enter custom SQL statement: \n\
         Warning: This statement will be executed regardless of how destructive to the database it may be. \n\
         Run command EXIT to exit.",
    )?;
    loop {
        let statement = console.read_required()?;
        if statement == EXIT_WORD {
            return Ok(());
        }

        console.say(format!("Executing statement {}", statement))?;
        match execute_unchecked(conn, &statement) {
            Ok(outcomes) => {
                for outcome in &outcomes {
                    print_rows(console, &outcome.rows)?;
                    if let Some(changes) = outcome.changes {
                        console.say(format!("Rows affected: {}", changes))?;
                    }
                }
                console.say("Statement executed successfully.")?;
            }
            Err(e) => console.say(format!("Error: {}", e))?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{count, Column, Table};
    use crate::test_utils::{scripted, seeded_db, test_db, transcript};
    use rstest::rstest;

    #[rstest]
    fn test_select_rows_captured() {
        let conn = seeded_db();
        let outcomes =
            execute_unchecked(&conn, "SELECT Customer_Short_Name, Group_Name FROM Customers WHERE Customer_ID = 8")
                .unwrap();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].rows.len(), 1);
        assert_eq!(outcomes[0].rows[0].get("Customer_Short_Name"), Some("RGOULDING"));
        assert_eq!(outcomes[0].changes, None);
    }

    #[rstest]
    fn test_dml_reports_changes() {
        let conn = seeded_db();
        let outcomes = execute_unchecked(&conn, "UPDATE Customers SET Credit_Limit = 1 WHERE Group_Name = 'SMITH FAMILY'").unwrap();
        assert!(outcomes[0].rows.is_empty());
        assert_eq!(outcomes[0].changes, Some(3));
    }

    #[rstest]
    fn test_schema_statement_after_update_reports_no_rows() {
        let conn = seeded_db();
        execute_unchecked(&conn, "UPDATE Customers SET Credit_Limit = 1 WHERE Group_Name = 'SMITH FAMILY'").unwrap();
        let outcomes = execute_unchecked(&conn, "CREATE TABLE Notes(body TEXT)").unwrap();
        assert_eq!(outcomes[0].changes, Some(0));
    }

    #[rstest]
    fn test_every_statement_in_input_runs() {
        let conn = seeded_db();
        let outcomes = execute_unchecked(
            &conn,
            "DELETE FROM CustomerAddress WHERE Address_ID = 8; DELETE FROM CustomerAddress WHERE Address_ID = 7;",
        )
        .unwrap();
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.changes == Some(1)));
        assert_eq!(count(&conn, Table::Addresses, Column::All).unwrap(), 6);
    }

    #[rstest]
    fn test_failing_statement_keeps_earlier_ones() {
        let conn = seeded_db();
        let err = execute_unchecked(
            &conn,
            "DELETE FROM CustomerAddress WHERE Address_ID = 8; SELEKT 1; DELETE FROM CustomerAddress WHERE Address_ID = 7;",
        )
        .unwrap_err();
        assert_eq!(err.stage(), "prepare");
        assert_eq!(count(&conn, Table::Addresses, Column::All).unwrap(), 7);
    }

    #[rstest]
    fn test_bad_sql_is_a_prepare_error() {
        let conn = test_db();
        let err = execute_unchecked(&conn, "SELEKT 1").unwrap_err();
        assert_eq!(err.stage(), "prepare");
    }

    #[rstest]
    fn test_loop_until_exit() {
        let conn = seeded_db();
        let mut console = scripted("SELECT COUNT(*) AS n FROM Customers\nnonsense\n  EXIT  \nSELECT 1\n");
        run(&conn, &mut console).unwrap();

        let out = transcript(console);
        assert!(out.contains("Executing statement SELECT COUNT(*) AS n FROM Customers\nn : 8\n"));
        assert!(out.contains("Error: Error preparing statement"));
        assert!(!out.contains("Executing statement SELECT 1"));
    }

    #[rstest]
    fn test_loop_prints_rows_affected() {
        let conn = seeded_db();
        let mut console = scripted("DELETE FROM CustomerAddress WHERE Address_ID = 8; DELETE FROM CustomerAddress WHERE Address_ID = 7\nEXIT\n");
        run(&conn, &mut console).unwrap();

        let out = transcript(console);
        assert_eq!(out.matches("Rows affected: 1\n").count(), 2);
        assert!(out.contains("Statement executed successfully."));
    }
}
