use std::error::Error;

use rusqlite::Connection;
use serde::Serialize;

use super::ShowCmd;
use crate::commands::Execute;
use crate::queries::addresses::list_addresses_for;
use crate::queries::customers::get_customer_by_short_name;
use crate::types::{Address, Customer};
use crate::utils::trim_whitespace;

/// Result of the show command execution
#[derive(Debug, Serialize)]
pub struct ShowResult {
    pub customer: Customer,
    pub addresses: Vec<Address>,
}

impl Execute for ShowCmd {
    type Output = ShowResult;

    fn execute(self, conn: &Connection) -> Result<Self::Output, Box<dyn Error>> {
        let short_name = trim_whitespace(&self.short_name);
        let customer = get_customer_by_short_name(conn, short_name)?
            .ok_or_else(|| format!("Customer short name not found: {}", short_name))?;
        let addresses = list_addresses_for(conn, customer.customer_id)?;
        Ok(ShowResult {
            customer,
            addresses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::seeded_db;
    use rstest::rstest;

    #[rstest]
    fn test_show_customer_with_addresses() {
        let conn = seeded_db();
        let result = ShowCmd {
            short_name: "JSMITH".to_string(),
        }
        .execute(&conn)
        .unwrap();
        assert_eq!(result.customer.customer_id, 1);
        assert_eq!(result.customer.group_name.as_deref(), Some("SMITH FAMILY"));
        let lines: Vec<_> = result.addresses.iter().map(|a| a.line_1.as_str()).collect();
        assert_eq!(lines, vec!["1 Regent Road", "26 Lombard Street"]);
    }

    #[rstest]
    fn test_show_customer_without_addresses() {
        let conn = seeded_db();
        let result = ShowCmd {
            short_name: "BJONES".to_string(),
        }
        .execute(&conn)
        .unwrap();
        assert!(result.addresses.is_empty());
    }

    #[rstest]
    fn test_show_unknown() {
        let conn = seeded_db();
        let result = ShowCmd {
            short_name: "NOBODY".to_string(),
        }
        .execute(&conn);
        assert!(result.is_err());
    }

    crate::execute_empty_db_test! {
        cmd_type: ShowCmd,
        cmd: ShowCmd { short_name: "JSMITH".to_string() },
    }
}
