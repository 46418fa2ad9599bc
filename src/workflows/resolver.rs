//! Customer resolution by short name.

use std::io::{BufRead, Write};

use rusqlite::Connection;
use tracing::warn;

use super::WorkflowError;
use crate::console::Console;
use crate::queries::customers::{count_short_name, find_customer_id};
use crate::types::{CustomerLookup, ResolvedCustomer};

/// Read short names until one exists in `Customers`.
///
/// A failed existence count is reported to the operator and the prompt
/// repeats. Nothing else is read from storage.
pub fn prompt_short_name<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<String, WorkflowError> {
    loop {
        let short_name = console.read_required()?;
        match count_short_name(conn, &short_name) {
            Ok(0) => console.say("Error: Customer short name not found in the database.\nPlease try again")?,
            Ok(_) => {
                console.say("Customer identified. Proceeding.")?;
                return Ok(short_name);
            }
            Err(e) => {
                warn!(short_name = %short_name, stage = e.stage(), error = %e, "short name lookup failed");
                console.say("An error occurred searching for that name in the database.\nPlease try again.")?;
            }
        }
    }
}

/// Print `prompt`, read a valid short name, then resolve its id.
///
/// Returns `None` when the customer vanished between the existence check
/// and the id lookup.
pub fn prompt_customer<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
    prompt: &str,
) -> Result<Option<ResolvedCustomer>, WorkflowError> {
    console.say(prompt)?;
    let short_name = prompt_short_name(conn, console)?;
    match find_customer_id(conn, &short_name)? {
        CustomerLookup::Found(customer_id) => Ok(Some(ResolvedCustomer {
            short_name,
            customer_id,
        })),
        CustomerLookup::NotFound => {
            console.say(format!("Error fetching customer ID for {}.", short_name))?;
            Ok(None)
        }
    }
}
