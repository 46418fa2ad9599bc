use std::error::Error;

use rusqlite::Connection;
use serde::Serialize;

use super::StatsCmd;
use crate::commands::Execute;
use crate::db::{count, Column, Table};

/// Result of the stats command execution
#[derive(Debug, Serialize)]
pub struct StatsResult {
    pub customers: i64,
    pub addresses: i64,
}

impl Execute for StatsCmd {
    type Output = StatsResult;

    fn execute(self, conn: &Connection) -> Result<Self::Output, Box<dyn Error>> {
        Ok(StatsResult {
            customers: count(conn, Table::Customers, Column::All)?,
            addresses: count(conn, Table::Addresses, Column::All)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{insert_customer, seeded_db};
    use rstest::rstest;

    #[rstest]
    fn test_counts_seeded_rows() {
        let conn = seeded_db();
        let result = StatsCmd {}.execute(&conn).unwrap();
        assert_eq!(result.customers, 8);
        assert_eq!(result.addresses, 8);
    }

    #[rstest]
    fn test_count_is_stable_without_writes() {
        let conn = seeded_db();
        let first = StatsCmd {}.execute(&conn).unwrap();
        let second = StatsCmd {}.execute(&conn).unwrap();
        assert_eq!(first.customers, second.customers);

        insert_customer(&conn, "JDOE");
        assert_eq!(StatsCmd {}.execute(&conn).unwrap().customers, 9);
    }

    crate::execute_empty_db_test! {
        cmd_type: StatsCmd,
        cmd: StatsCmd {},
    }
}
