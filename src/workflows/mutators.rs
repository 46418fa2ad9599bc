//! Insert, update, and delete flows for customers and addresses.
//!
//! Each flow collects its fields from the console, runs exactly one query
//! function, and reports back an [`Outcome`].

use std::io::{BufRead, Write};

use rusqlite::Connection;
use tracing::warn;

use super::disambiguator::select_customer_address;
use super::resolver::prompt_customer;
use super::WorkflowError;
use crate::console::Console;
use crate::queries::{addresses, customers};
use crate::types::{
    AddressFields, AddressSelection, CascadeDeletion, CreditTerms, CustomerNames, NewCustomer,
    ResolvedCustomer,
};

const LEAVE_BLANK: &str = "Leave blank for NULL.";

/// What a mutating flow ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Inserted(i64),
    Updated(usize),
    DeletedCustomer(CascadeDeletion),
    DeletedAddress(i64),
    /// The operator declined the confirmation.
    Aborted,
    CustomerNotFound,
    NoAddresses,
}

fn ask_optional<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> Result<Option<String>, WorkflowError> {
    console.say(format!("{}\n{}", prompt, LEAVE_BLANK))?;
    Ok(console.read_optional()?)
}

fn ask_required<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> Result<String, WorkflowError> {
    console.say(prompt)?;
    Ok(console.read_required()?)
}

fn ask_amount<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> Result<i64, WorkflowError> {
    console.say(prompt)?;
    Ok(console.read_int()?)
}

/// Read short names until one is not yet taken.
fn prompt_unique_short_name<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<String, WorkflowError> {
    loop {
        let short_name = ask_required(
            console,
            "Please enter a unique customer short name, which can be used as an identifier. \
             Typical format: John Smith -> JSMITH ",
        )?;
        match customers::count_short_name(conn, &short_name) {
            Ok(0) => return Ok(short_name),
            Ok(_) => console.say(
                "Error: Short name already in table. Please use new name or amend existing record.\n",
            )?,
            Err(e) => {
                warn!(short_name = %short_name, error = %e, "uniqueness check failed");
                console.say("An error occurred searching for that name in the database.\nPlease try again.")?;
            }
        }
    }
}

fn prompt_names<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    which: &str,
) -> Result<CustomerNames, WorkflowError> {
    Ok(CustomerNames {
        first_name: ask_optional(console, &format!("Please enter the {} first name:", which))?,
        last_name: ask_optional(console, &format!("Please enter the {} surname:", which))?,
        group_name: ask_optional(console, &format!("Please enter the {} group name:", which))?,
    })
}

fn prompt_credit<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    which: &str,
) -> Result<CreditTerms, WorkflowError> {
    Ok(CreditTerms {
        credit_limit: ask_amount(console, &format!("Please enter the {} credit limit:", which))?,
        outstanding_credit: ask_amount(
            console,
            &format!("Please enter the {} outstanding credit:", which),
        )?,
    })
}

fn prompt_address_fields<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<AddressFields, WorkflowError> {
    Ok(AddressFields {
        address_type: ask_optional(console, "Please enter the address type:")?,
        contact_name: ask_optional(console, "Please enter the contact name for this address:")?,
        line_1: ask_required(console, "Please enter the first line of the address:")?,
        line_2: ask_optional(console, "Please enter the second line of the address:")?,
        line_3: ask_optional(console, "Please enter the third line of the address:")?,
        line_4: ask_optional(console, "Please enter the fourth line of the address:")?,
        line_5: ask_optional(console, "Please enter the fifth line of the address:")?,
    })
}

/// Collect a new customer and insert it.
pub fn insert_customer<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<Outcome, WorkflowError> {
    let short_name = prompt_unique_short_name(conn, console)?;
    let names = prompt_names(console, "new customer's")?;
    let credit = prompt_credit(console, "new customer's")?;

    let id = customers::insert_customer(
        conn,
        &NewCustomer {
            short_name,
            names,
            credit,
        },
    )?;
    console.say("Record added successfully.\n")?;
    Ok(Outcome::Inserted(id))
}

/// Resolve the owning customer, collect an address, and insert it.
pub fn insert_address<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<Outcome, WorkflowError> {
    let Some(customer) = prompt_customer(
        conn,
        console,
        "To add a new address, the corresponding customer must first be specified. \
         Please enter the Customer's Short Name identifier:",
    )?
    else {
        return Ok(Outcome::CustomerNotFound);
    };

    let fields = prompt_address_fields(console)?;
    let id = addresses::insert_address(conn, &customer.short_name, &fields)?;
    console.say("Record added successfully.\n")?;
    Ok(Outcome::Inserted(id))
}

pub fn update_customer_names<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
    customer: &ResolvedCustomer,
) -> Result<Outcome, WorkflowError> {
    let names = prompt_names(console, "customer's updated")?;
    let changed = customers::update_customer_names(conn, customer.customer_id, &names)?;
    console.say("Record updated successfully.")?;
    Ok(Outcome::Updated(changed))
}

pub fn update_customer_credit<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
    customer: &ResolvedCustomer,
) -> Result<Outcome, WorkflowError> {
    let credit = prompt_credit(console, "customer's updated")?;
    let changed = customers::update_customer_credit(conn, customer.customer_id, credit)?;
    console.say("Record updated successfully.")?;
    Ok(Outcome::Updated(changed))
}

/// Pick one of the customer's addresses and overwrite its fields.
pub fn update_address<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
    customer: &ResolvedCustomer,
) -> Result<Outcome, WorkflowError> {
    let address_id = match select_customer_address(conn, console, customer)? {
        AddressSelection::Selected(id) => id,
        AddressSelection::NoAddresses => {
            report_no_addresses(console, customer)?;
            return Ok(Outcome::NoAddresses);
        }
        AddressSelection::CustomerNotFound => return Ok(Outcome::CustomerNotFound),
    };

    let fields = prompt_address_fields(console)?;
    let changed = addresses::update_address(conn, address_id, &fields)?;
    console.say("Address updated successfully.\n")?;
    Ok(Outcome::Updated(changed))
}

/// Confirm, then delete the customer and every address it owns.
pub fn delete_customer<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
    customer: &ResolvedCustomer,
) -> Result<Outcome, WorkflowError> {
    console.say(format!(
        "This command will delete all customer and address data associated with customer {}. \
         Are you sure you would like to proceed? [y/n]",
        customer.short_name
    ))?;
    if !console.read_yes_no()? {
        console.say("Deletion of data aborted.")?;
        return Ok(Outcome::Aborted);
    }

    let deleted = customers::delete_customer_cascade(conn, customer.customer_id)?;
    console.say(format!(
        "Addresses associated with customer {} deleted successfully.",
        customer.short_name
    ))?;
    console.say(format!("Customer data for {} deleted successfully.", customer.short_name))?;
    Ok(Outcome::DeletedCustomer(deleted))
}

/// Pick one of the customer's addresses, confirm, and delete it.
pub fn delete_address<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
    customer: &ResolvedCustomer,
) -> Result<Outcome, WorkflowError> {
    let address_id = match select_customer_address(conn, console, customer)? {
        AddressSelection::Selected(id) => id,
        AddressSelection::NoAddresses => {
            report_no_addresses(console, customer)?;
            return Ok(Outcome::NoAddresses);
        }
        AddressSelection::CustomerNotFound => return Ok(Outcome::CustomerNotFound),
    };

    console.say(format!(
        "This statement will delete address {} from the database. Would you like to proceed? [y/n]",
        address_id
    ))?;
    if !console.read_yes_no()? {
        console.say("Deletion of address aborted.")?;
        return Ok(Outcome::Aborted);
    }

    addresses::delete_address(conn, address_id)?;
    console.say(format!("Address {} deleted successfully.", address_id))?;
    Ok(Outcome::DeletedAddress(address_id))
}

fn report_no_addresses<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    customer: &ResolvedCustomer,
) -> Result<(), WorkflowError> {
    console.say(format!(
        "Customer {} is not associated with any addresses in the database.",
        customer.short_name
    ))?;
    Ok(())
}
