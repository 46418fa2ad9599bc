//! List-then-select protocol for choosing one of a customer's addresses.

use std::collections::BTreeSet;
use std::io::{BufRead, Write};

use rusqlite::Connection;
use tracing::debug;

use super::WorkflowError;
use crate::console::Console;
use crate::queries::addresses::{count_addresses, list_addresses_for};
use crate::queries::customers::find_customer_id;
use crate::types::{AddressSelection, CustomerLookup, ResolvedCustomer};

/// Resolve `short_name`, then select one of its addresses.
pub fn select_address<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
    short_name: &str,
) -> Result<AddressSelection, WorkflowError> {
    match find_customer_id(conn, short_name)? {
        CustomerLookup::Found(customer_id) => {
            let customer = ResolvedCustomer {
                short_name: short_name.to_string(),
                customer_id,
            };
            select_customer_address(conn, console, &customer)
        }
        CustomerLookup::NotFound => Ok(AddressSelection::CustomerNotFound),
    }
}

/// Print every address of `customer` and read ids until one of them is entered.
pub fn select_customer_address<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
    customer: &ResolvedCustomer,
) -> Result<AddressSelection, WorkflowError> {
    let total = count_addresses(conn, customer.customer_id)?;
    if total == 0 {
        return Ok(AddressSelection::NoAddresses);
    }

    console.say(format!(
        "Customer {} is associated with {} addresses:",
        customer.short_name, total
    ))?;

    let mut candidates = BTreeSet::new();
    for address in list_addresses_for(conn, customer.customer_id)? {
        console.say(&address)?;
        candidates.insert(address.address_id);
    }
    // Rows removed between the count and the listing leave nothing to pick.
    if candidates.is_empty() {
        return Ok(AddressSelection::NoAddresses);
    }
    debug!(customer_id = customer.customer_id, candidates = ?candidates, "address candidates");

    console.say("Please enter the address ID of the address you would like to process:")?;
    loop {
        let id = console.read_int()?;
        if candidates.contains(&id) {
            console.say("Address identified. Proceeding.\n")?;
            return Ok(AddressSelection::Selected(id));
        }
        console.say(format!(
            "Error: Please enter an address ID which corresponds with customer {}",
            customer.short_name
        ))?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{insert_address, insert_customer, scripted, test_db, transcript};
    use rstest::rstest;

    #[rstest]
    fn test_rejects_ids_outside_candidate_set() {
        let conn = test_db();
        insert_customer(&conn, "JDOE");
        insert_customer(&conn, "ASMITH");
        let first = insert_address(&conn, "JDOE", "1 High Street");
        let foreign = insert_address(&conn, "ASMITH", "9 Low Road");
        let second = insert_address(&conn, "JDOE", "2 High Street");

        let script = format!("{}\n999\nabc\n{}\n", foreign, second);
        let mut console = scripted(&script);
        let selection = select_address(&conn, &mut console, "JDOE").unwrap();
        assert_eq!(selection, AddressSelection::Selected(second));

        let out = transcript(console);
        assert!(out.contains("Customer JDOE is associated with 2 addresses:"));
        assert!(out.contains(&format!("Address_ID : {}\n", first)));
        assert!(out.contains(&format!("Address_ID : {}\n", second)));
        assert!(!out.contains("9 Low Road"));
        assert_eq!(out.matches("Please enter an address ID which corresponds with customer JDOE").count(), 2);
        assert!(out.contains("Error. Please enter a valid integer value."));
    }

    #[rstest]
    fn test_numeric_date_cell_still_listed() {
        let conn = test_db();
        insert_customer(&conn, "JDOE");
        let id = insert_address(&conn, "JDOE", "1 High Street");
        conn.execute("UPDATE CustomerAddress SET Created_On = 20240101 WHERE Address_ID = ?", [id])
            .unwrap();

        let mut console = scripted(&format!("{}\n", id));
        let selection = select_address(&conn, &mut console, "JDOE").unwrap();
        assert_eq!(selection, AddressSelection::Selected(id));
        assert!(transcript(console).contains("Created_On : 20240101\n"));
    }

    #[rstest]
    fn test_no_addresses_is_not_an_error() {
        let conn = test_db();
        insert_customer(&conn, "JDOE");
        let mut console = scripted("");
        let selection = select_address(&conn, &mut console, "JDOE").unwrap();
        assert_eq!(selection, AddressSelection::NoAddresses);
        assert!(transcript(console).is_empty());
    }

    #[rstest]
    fn test_unknown_customer() {
        let conn = test_db();
        let mut console = scripted("");
        let selection = select_address(&conn, &mut console, "NOBODY").unwrap();
        assert_eq!(selection, AddressSelection::CustomerNotFound);
    }
}
