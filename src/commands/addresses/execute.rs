use std::error::Error;

use rusqlite::Connection;
use serde::Serialize;

use super::AddressesCmd;
use crate::commands::Execute;
use crate::queries::addresses::{list_addresses, list_addresses_for};
use crate::queries::customers::find_customer_id;
use crate::types::{Address, CustomerLookup};
use crate::utils::trim_whitespace;

/// Result of the addresses command execution
#[derive(Debug, Serialize)]
pub struct AddressesResult {
    pub short_name: Option<String>,
    pub addresses: Vec<Address>,
}

impl Execute for AddressesCmd {
    type Output = AddressesResult;

    fn execute(self, conn: &Connection) -> Result<Self::Output, Box<dyn Error>> {
        let Some(raw) = self.short_name else {
            return Ok(AddressesResult {
                short_name: None,
                addresses: list_addresses(conn)?,
            });
        };

        let short_name = trim_whitespace(&raw).to_string();
        let customer_id = match find_customer_id(conn, &short_name)? {
            CustomerLookup::Found(id) => id,
            CustomerLookup::NotFound => {
                return Err(format!("Customer short name not found: {}", short_name).into())
            }
        };
        Ok(AddressesResult {
            addresses: list_addresses_for(conn, customer_id)?,
            short_name: Some(short_name),
        })
    }
}
