use std::fmt;

use rusqlite::Row;
use serde::Serialize;

use super::{read_amount, read_text, write_fields};

/// A row of the `Customers` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub customer_id: i64,
    pub short_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub group_name: Option<String>,
    pub credit_limit: Option<i64>,
    pub outstanding_credit: Option<i64>,
    pub created_on: Option<String>,
    pub updated_on: Option<String>,
}

impl Customer {
    /// Column list matching [`Customer::from_row`].
    pub const COLUMNS: &'static str = "Customer_ID, Customer_Short_Name, First_Name, Last_Name, \
        Group_Name, Credit_Limit, Outstanding_Credit, Created_On, Updated_On";

    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            customer_id: row.get(0)?,
            short_name: row.get(1)?,
            first_name: row.get(2)?,
            last_name: row.get(3)?,
            group_name: row.get(4)?,
            credit_limit: read_amount(row, 5)?,
            outstanding_credit: read_amount(row, 6)?,
            created_on: read_text(row, 7)?,
            updated_on: read_text(row, 8)?,
        })
    }

    /// Full display name, falling back to the short name.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(only), None) | (None, Some(only)) => only.clone(),
            (None, None) => self.short_name.clone(),
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fields(
            f,
            &[
                ("Customer_ID", Some(self.customer_id.to_string())),
                ("Customer_Short_Name", Some(self.short_name.clone())),
                ("First_Name", self.first_name.clone()),
                ("Last_Name", self.last_name.clone()),
                ("Group_Name", self.group_name.clone()),
                ("Credit_Limit", self.credit_limit.map(|v| v.to_string())),
                ("Outstanding_Credit", self.outstanding_credit.map(|v| v.to_string())),
                ("Created_On", self.created_on.clone()),
                ("Updated_On", self.updated_on.clone()),
            ],
        )
    }
}

/// The optional name fields of a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerNames {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub group_name: Option<String>,
}

/// Credit limit and outstanding balance, in whole currency units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreditTerms {
    pub credit_limit: i64,
    pub outstanding_credit: i64,
}

/// Everything needed to insert a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub short_name: String,
    pub names: CustomerNames,
    pub credit: CreditTerms,
}
