//! Shared test utilities for query, workflow, and command tests.
//!
//! This module provides common helpers for building databases and scripted consoles.

use std::io::Cursor;

use rusqlite::Connection;

use crate::console::Console;
use crate::db::{open_mem_db, schema};
use crate::queries::{addresses, customers};
use crate::types::{AddressFields, CreditTerms, CustomerNames, NewCustomer};

/// A console reading from a fixed script and writing into a buffer.
pub type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

/// Create an in-memory database with both tables and no rows.
pub fn test_db() -> Connection {
    let conn = open_mem_db().expect("Failed to open in-memory database");
    schema::bootstrap(&conn).expect("Bootstrap should succeed");
    conn
}

/// Create an in-memory database holding the demonstration rows.
pub fn seeded_db() -> Connection {
    let conn = test_db();
    schema::seed_sample_data(&conn).expect("Seeding should succeed");
    conn
}

/// Console whose input is `script`, one answer per line.
pub fn scripted(script: &str) -> ScriptedConsole {
    Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
}

/// Everything the console printed.
pub fn transcript(console: ScriptedConsole) -> String {
    String::from_utf8(console.into_output()).expect("Console output should be UTF-8")
}

pub fn new_customer(short_name: &str, credit_limit: i64, outstanding_credit: i64) -> NewCustomer {
    NewCustomer {
        short_name: short_name.to_string(),
        names: CustomerNames::default(),
        credit: CreditTerms {
            credit_limit,
            outstanding_credit,
        },
    }
}

/// Insert a customer with blank names and zero credit. Returns its id.
pub fn insert_customer(conn: &Connection, short_name: &str) -> i64 {
    customers::insert_customer(conn, &new_customer(short_name, 0, 0))
        .expect("Customer insert should succeed")
}

/// Insert an address with only its first line set. Returns its id.
pub fn insert_address(conn: &Connection, short_name: &str, line_1: &str) -> i64 {
    addresses::insert_address(conn, short_name, &AddressFields::line(line_1))
        .expect("Address insert should succeed")
}
