use std::io::{BufRead, Write};

use rusqlite::Connection;
use tracing::warn;

use super::recover;
use crate::console::Console;
use crate::db::{count, query_trusted, Column, RecordRow, Table, TrustedSql};
use crate::queries::addresses::{count_addresses, list_addresses_for};
use crate::queries::customers::{find_customer_id, get_customer};
use crate::types::CustomerLookup;
use crate::workflows::{prompt_short_name, WorkflowError};

const VIEW_MENU: &str = "Please select action:\n\
    1: View all Customer data.\n\
    2: View all Address data.\n\
    3: View all Customer and Address joint data.\n\
    4: Search for data on a specific customer.\n\
    0: Exit.";

const ALL_CUSTOMERS: TrustedSql = TrustedSql::new("SELECT * FROM Customers;");
const ALL_ADDRESSES: TrustedSql = TrustedSql::new("SELECT * FROM CustomerAddress;");
const JOINED: TrustedSql = TrustedSql::new(
    "SELECT * FROM Customers INNER JOIN CustomerAddress \
     WHERE Customers.Customer_ID = CustomerAddress.Customer_ID \
     ORDER BY Customers.Customer_ID;",
);

pub(super) fn run<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<(), WorkflowError> {
    match (
        count(conn, Table::Customers, Column::All),
        count(conn, Table::Addresses, Column::All),
    ) {
        (Ok(customers), Ok(addresses)) => console.say(format!(
            "Currently storing {} customers and {} addresses.",
            customers, addresses
        ))?,
        (Err(e), _) | (_, Err(e)) => {
            warn!(error = %e, "row count failed");
            console.say("Error: Could not count number of customers and addresses in database.")?;
        }
    }

    loop {
        console.say(VIEW_MENU)?;
        let result = match console.read_int_between(0, 4)? {
            0 => return Ok(()),
            1 => print_trusted(conn, console, ALL_CUSTOMERS),
            2 => print_trusted(conn, console, ALL_ADDRESSES),
            3 => print_trusted(conn, console, JOINED),
            _ => search(conn, console),
        };
        recover(console, result)?;
    }
}

fn print_trusted<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
    sql: TrustedSql,
) -> Result<(), WorkflowError> {
    let rows = query_trusted(conn, sql)?;
    print_rows(console, &rows)
}

pub(super) fn print_rows<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    rows: &[RecordRow],
) -> Result<(), WorkflowError> {
    for row in rows {
        console.say(row)?;
    }
    Ok(())
}

/// One customer's row followed by every address it owns.
fn search<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<(), WorkflowError> {
    console.say("Please enter the short name identifier of the customer you would like to search.")?;
    let short_name = prompt_short_name(conn, console)?;

    let customer_id = match find_customer_id(conn, &short_name)? {
        CustomerLookup::Found(id) => id,
        CustomerLookup::NotFound => {
            console.say("Error fetching customer data.")?;
            return Ok(());
        }
    };

    console.say("Customer Data:")?;
    if let Some(customer) = get_customer(conn, customer_id)? {
        console.say(&customer)?;
    }
    let total = count_addresses(conn, customer_id)?;
    console.say(format!(
        "Customer {} is associated with {} addresses:",
        short_name, total
    ))?;
    for address in list_addresses_for(conn, customer_id)? {
        console.say(&address)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{scripted, seeded_db, transcript};
    use rstest::rstest;

    #[rstest]
    fn test_counts_then_exit() {
        let conn = seeded_db();
        let mut console = scripted("0\n");
        run(&conn, &mut console).unwrap();
        let out = transcript(console);
        assert!(out.starts_with("Currently storing 8 customers and 8 addresses.\n"));
    }

    #[rstest]
    fn test_joined_rows_ordered_by_customer() {
        let conn = seeded_db();
        let mut console = scripted("3\n0\n");
        run(&conn, &mut console).unwrap();
        let out = transcript(console);
        assert_eq!(out.matches("Address_Line_1 : ").count(), 8);
        let smith = out.find("Customer_Short_Name : JSMITH").unwrap();
        let baker = out.find("Customer_Short_Name : ABAKER").unwrap();
        assert!(smith < baker);
        assert!(out.contains("Address_Line_4 : NULL"));
    }

    #[rstest]
    fn test_search_prints_customer_and_addresses() {
        let conn = seeded_db();
        let mut console = scripted("4\nnobody\nABAKER\n0\n");
        run(&conn, &mut console).unwrap();
        let out = transcript(console);
        assert!(out.contains("Customer short name not found"));
        assert!(out.contains("Customer Data:\nCustomer_ID : 6\n"));
        assert!(out.contains("Customer ABAKER is associated with 3 addresses:"));
        assert!(out.contains("1 Canada Square"));
        assert!(!out.contains("1 Regent Road"));
    }
}
