//! Add, update, and remove sub-menus.

use std::io::{BufRead, Write};

use rusqlite::Connection;

use super::recover;
use crate::console::Console;
use crate::queries::customers::get_customer;
use crate::workflows::{mutators, prompt_customer, WorkflowError};

const ADD_MENU: &str = "Would you like to add a new customer or new address to the database?\n\
    1: Customer\n\
    2: Address\n\
    0: Exit";

const UPDATE_MENU: &str = "Which type of data would you like to update?\n\
    1. Customer\n\
    2. Address\n\
    0. Exit";

const UPDATE_CUSTOMER_MENU: &str = "Which data would you like to update for this customer?\n\
    1. Customer Name and Group Name.\n\
    2. Customer Credit Limit and Outstanding Credit.";

const REMOVE_MENU: &str = "Please select action:\n\
    1. Delete customer and all associated addresses.\n\
    2. Delete a single address associated with a particular customer.\n\
    0. Exit";

pub(super) fn add<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<(), WorkflowError> {
    loop {
        console.say(ADD_MENU)?;
        let result = match console.read_int_between(0, 2)? {
            0 => return Ok(()),
            1 => mutators::insert_customer(conn, console),
            _ => mutators::insert_address(conn, console),
        };
        recover(console, result)?;
    }
}

pub(super) fn update<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<(), WorkflowError> {
    loop {
        console.say(UPDATE_MENU)?;
        let choice = console.read_int_between(0, 2)?;
        if choice == 0 {
            return Ok(());
        }
        let result = update_one(conn, console, choice);
        recover(console, result)?;
    }
}

fn update_one<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
    choice: i64,
) -> Result<(), WorkflowError> {
    let Some(customer) = prompt_customer(
        conn,
        console,
        "Please enter the Short Name identifier of the customer you would like to update:",
    )?
    else {
        return Ok(());
    };

    if choice == 2 {
        mutators::update_address(conn, console, &customer)?;
        return Ok(());
    }

    console.say(format!("Showing data for customer: {}", customer.short_name))?;
    if let Some(record) = get_customer(conn, customer.customer_id)? {
        console.say(&record)?;
    }
    console.say(UPDATE_CUSTOMER_MENU)?;
    match console.read_int_between(1, 2)? {
        1 => mutators::update_customer_names(conn, console, &customer)?,
        _ => mutators::update_customer_credit(conn, console, &customer)?,
    };
    Ok(())
}

pub(super) fn remove<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<(), WorkflowError> {
    loop {
        console.say(REMOVE_MENU)?;
        let choice = console.read_int_between(0, 2)?;
        if choice == 0 {
            return Ok(());
        }
        let result = remove_one(conn, console, choice);
        recover(console, result)?;
    }
}

fn remove_one<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
    choice: i64,
) -> Result<(), WorkflowError> {
    let Some(customer) =
        prompt_customer(conn, console, "Please enter the short name identifier of the customer:")?
    else {
        return Ok(());
    };

    if choice == 1 {
        mutators::delete_customer(conn, console, &customer)?;
    } else {
        mutators::delete_address(conn, console, &customer)?;
    }
    Ok(())
}
