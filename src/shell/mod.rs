//! The interactive menu shell.
//!
//! A loop over the main menu that dispatches into the view, edit, and raw
//! SQL flows. Storage failures inside a flow are reported to the operator
//! and the menu comes back; a closed input stream ends the session.

mod edit;
mod raw_sql;
mod view;

pub use raw_sql::{execute_unchecked, RawOutcome};

use std::io::{BufRead, Write};

use rusqlite::Connection;
use tracing::{error, info};

use crate::console::{Console, InputError};
use crate::workflows::WorkflowError;

const MAIN_MENU: &str = "Please select your option by entering the correct number : \n\
    1. View data in the database. \n\
    2. Add new data to the database. \n\
    3. Update existing data in the database. \n\
    4. Remove customer(s) from the database. \n\
    5. Run custom SQL on the database. \n\
    0. Exit \n";

/// Run the menu loop until the operator exits or input ends.
pub fn run<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<(), InputError> {
    match menu_loop(conn, console) {
        Err(InputError::Closed) => {
            info!("input closed, leaving shell");
            Ok(())
        }
        other => other,
    }
}

fn menu_loop<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<(), InputError> {
    console.say("Welcome to the Customer Manager. ")?;
    loop {
        console.say(MAIN_MENU)?;
        let result = match console.read_int_between(0, 5)? {
            0 => return Ok(()),
            1 => view::run(conn, console),
            2 => edit::add(conn, console),
            3 => edit::update(conn, console),
            4 => edit::remove(conn, console),
            _ => raw_sql::run(conn, console),
        };
        recover(console, result)?;
        console.say("")?;
    }
}

/// Report a storage failure to the operator and carry on.
///
/// Console failures are passed up; there is nobody left to report them to.
pub(crate) fn recover<T, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    result: Result<T, WorkflowError>,
) -> Result<Option<T>, InputError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(WorkflowError::Db(e)) => {
            error!(stage = e.stage(), error = %e, "operation failed");
            console.say(format!("Error: {}", e))?;
            Ok(None)
        }
        Err(WorkflowError::Input(e)) => Err(e),
    }
}
