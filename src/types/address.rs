use std::fmt;

use rusqlite::Row;
use serde::Serialize;

use super::{read_text, write_fields};

/// A row of the `CustomerAddress` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub address_id: i64,
    pub customer_id: i64,
    pub address_type: Option<String>,
    pub contact_name: Option<String>,
    pub line_1: String,
    pub line_2: Option<String>,
    pub line_3: Option<String>,
    pub line_4: Option<String>,
    pub line_5: Option<String>,
    pub created_on: Option<String>,
    pub updated_on: Option<String>,
}

impl Address {
    /// Column list matching [`Address::from_row`].
    pub const COLUMNS: &'static str = "Address_ID, Customer_ID, Address_Type, Contact_Name, \
        Address_Line_1, Address_Line_2, Address_Line_3, Address_Line_4, Address_Line_5, \
        Created_On, Updated_On";

    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            address_id: row.get(0)?,
            customer_id: row.get(1)?,
            address_type: row.get(2)?,
            contact_name: row.get(3)?,
            line_1: row.get(4)?,
            line_2: row.get(5)?,
            line_3: row.get(6)?,
            line_4: row.get(7)?,
            line_5: row.get(8)?,
            created_on: read_text(row, 9)?,
            updated_on: read_text(row, 10)?,
        })
    }

    /// Non-empty address lines joined with `", "`.
    pub fn one_line(&self) -> String {
        std::iter::once(Some(&self.line_1))
            .chain([&self.line_2, &self.line_3, &self.line_4, &self.line_5].map(Option::as_ref))
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fields(
            f,
            &[
                ("Address_ID", Some(self.address_id.to_string())),
                ("Customer_ID", Some(self.customer_id.to_string())),
                ("Address_Type", self.address_type.clone()),
                ("Contact_Name", self.contact_name.clone()),
                ("Address_Line_1", Some(self.line_1.clone())),
                ("Address_Line_2", self.line_2.clone()),
                ("Address_Line_3", self.line_3.clone()),
                ("Address_Line_4", self.line_4.clone()),
                ("Address_Line_5", self.line_5.clone()),
                ("Created_On", self.created_on.clone()),
                ("Updated_On", self.updated_on.clone()),
            ],
        )
    }
}

/// Editable address fields. `line_1` is the only required one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressFields {
    pub address_type: Option<String>,
    pub contact_name: Option<String>,
    pub line_1: String,
    pub line_2: Option<String>,
    pub line_3: Option<String>,
    pub line_4: Option<String>,
    pub line_5: Option<String>,
}

impl AddressFields {
    /// Fields with only the required first line set.
    pub fn line(line_1: &str) -> Self {
        Self {
            line_1: line_1.to_string(),
            ..Self::default()
        }
    }
}
