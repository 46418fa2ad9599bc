use rusqlite::Connection;
use tracing::info;

use crate::db::{count_where, execute_params, query_first, query_params, Column, DbError, SqlParam, Table};
use crate::types::{Address, AddressFields};

// The owning id is a bound sub-SELECT: an unknown short name yields NULL and
// the NOT NULL constraint on Customer_ID rejects the row.
const INSERT: &str = "INSERT INTO CustomerAddress(Customer_ID, Address_Type, Contact_Name, \
    Address_Line_1, Address_Line_2, Address_Line_3, Address_Line_4, Address_Line_5, \
    Created_On, Updated_On) VALUES (\
    (SELECT Customer_ID FROM Customers WHERE Customer_Short_Name = ?), \
    ?, ?, ?, ?, ?, ?, ?, DATE('now'), DATE('now'));";

const UPDATE: &str = "UPDATE CustomerAddress SET Address_Type = ?, Contact_Name = ?, \
    Address_Line_1 = ?, Address_Line_2 = ?, Address_Line_3 = ?, Address_Line_4 = ?, \
    Address_Line_5 = ?, Updated_On = DATE('now') WHERE Address_ID = ?;";

const DELETE: &str = "DELETE FROM CustomerAddress WHERE Address_ID = ?;";

fn field_params(fields: &AddressFields) -> [SqlParam; 7] {
    [
        SqlParam::text_or_null(fields.address_type.as_deref()),
        SqlParam::text_or_null(fields.contact_name.as_deref()),
        fields.line_1.as_str().into(),
        SqlParam::text_or_null(fields.line_2.as_deref()),
        SqlParam::text_or_null(fields.line_3.as_deref()),
        SqlParam::text_or_null(fields.line_4.as_deref()),
        SqlParam::text_or_null(fields.line_5.as_deref()),
    ]
}

/// Number of addresses owned by a customer.
pub fn count_addresses(conn: &Connection, customer_id: i64) -> Result<i64, DbError> {
    count_where(conn, Table::Addresses, Column::All, Column::CustomerId, customer_id)
}

/// A customer's addresses ordered by id.
pub fn list_addresses_for(conn: &Connection, customer_id: i64) -> Result<Vec<Address>, DbError> {
    let sql = format!(
        "SELECT {} FROM CustomerAddress WHERE Customer_ID = ? ORDER BY Address_ID;",
        Address::COLUMNS
    );
    query_params(conn, &sql, &[customer_id.into()], Address::from_row)
}

pub fn list_addresses(conn: &Connection) -> Result<Vec<Address>, DbError> {
    let sql = format!("SELECT {} FROM CustomerAddress ORDER BY Address_ID;", Address::COLUMNS);
    query_params(conn, &sql, &[], Address::from_row)
}

pub fn get_address(conn: &Connection, address_id: i64) -> Result<Option<Address>, DbError> {
    let sql = format!("SELECT {} FROM CustomerAddress WHERE Address_ID = ?;", Address::COLUMNS);
    query_first(conn, &sql, &[address_id.into()], Address::from_row)
}

/// Insert an address for the customer holding `short_name`. Returns the new id.
pub fn insert_address(
    conn: &Connection,
    short_name: &str,
    fields: &AddressFields,
) -> Result<i64, DbError> {
    let mut params = Vec::with_capacity(8);
    params.push(SqlParam::from(short_name));
    params.extend(field_params(fields));
    execute_params(conn, INSERT, &params)?;

    let id = conn.last_insert_rowid();
    info!(address_id = id, short_name, "address inserted");
    Ok(id)
}

/// Overwrite every editable field of one address. Returns rows changed.
pub fn update_address(
    conn: &Connection,
    address_id: i64,
    fields: &AddressFields,
) -> Result<usize, DbError> {
    let mut params = field_params(fields).to_vec();
    params.push(address_id.into());
    execute_params(conn, UPDATE, &params)
}

pub fn delete_address(conn: &Connection, address_id: i64) -> Result<usize, DbError> {
    let deleted = execute_params(conn, DELETE, &[address_id.into()])?;
    info!(address_id, deleted, "address deleted");
    Ok(deleted)
}
