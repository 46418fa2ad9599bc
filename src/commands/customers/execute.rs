use std::error::Error;

use rusqlite::Connection;
use serde::Serialize;

use super::CustomersCmd;
use crate::commands::Execute;
use crate::queries::customers::list_customers;
use crate::types::Customer;

/// Result of the customers command execution
#[derive(Debug, Serialize)]
pub struct CustomersResult {
    pub customers: Vec<Customer>,
}

impl Execute for CustomersCmd {
    type Output = CustomersResult;

    fn execute(self, conn: &Connection) -> Result<Self::Output, Box<dyn Error>> {
        Ok(CustomersResult {
            customers: list_customers(conn)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{seeded_db, test_db};
    use rstest::rstest;

    #[rstest]
    fn test_lists_seeded_customers() {
        let conn = seeded_db();
        let result = CustomersCmd {}.execute(&conn).unwrap();
        assert_eq!(result.customers.len(), 8);
        assert_eq!(result.customers[0].short_name, "JSMITH");
        assert_eq!(result.customers[7].short_name, "RGOULDING");
    }

    #[rstest]
    fn test_empty_table() {
        let conn = test_db();
        assert!(CustomersCmd {}.execute(&conn).unwrap().customers.is_empty());
    }

    crate::execute_empty_db_test! {
        cmd_type: CustomersCmd,
        cmd: CustomersCmd {},
    }
}
