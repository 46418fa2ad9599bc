use rusqlite::Connection;
use tracing::{info, warn};

use crate::db::{count_where, execute_params, query_first, query_params, Column, DbError, SqlParam, Table};
use crate::types::{CascadeDeletion, CreditTerms, Customer, CustomerLookup, CustomerNames, NewCustomer};

const FIND_ID: &str = "SELECT Customer_ID FROM Customers WHERE Customer_Short_Name = ?;";

const INSERT: &str = "INSERT INTO Customers(Customer_Short_Name, First_Name, Last_Name, Group_Name, \
    Credit_Limit, Outstanding_Credit, Created_On, Updated_On) \
    VALUES (?, ?, ?, ?, ?, ?, DATE('now'), DATE('now'));";

const UPDATE_NAMES: &str = "UPDATE Customers SET First_Name = ?, Last_Name = ?, Group_Name = ?, \
    Updated_On = DATE('now') WHERE Customer_ID = ?;";

const UPDATE_CREDIT: &str = "UPDATE Customers SET Credit_Limit = ?, Outstanding_Credit = ?, \
    Updated_On = DATE('now') WHERE Customer_ID = ?;";

const DELETE_ADDRESSES: &str = "DELETE FROM CustomerAddress WHERE Customer_ID = ?;";
const DELETE_CUSTOMER: &str = "DELETE FROM Customers WHERE Customer_ID = ?;";

/// Map a short name to its customer id.
pub fn find_customer_id(conn: &Connection, short_name: &str) -> Result<CustomerLookup, DbError> {
    let id = query_first(conn, FIND_ID, &[short_name.into()], |row| row.get::<_, i64>(0))?;
    Ok(id.map_or(CustomerLookup::NotFound, CustomerLookup::Found))
}

/// Number of customers holding `short_name`: 0 or 1 given the UNIQUE constraint.
pub fn count_short_name(conn: &Connection, short_name: &str) -> Result<i64, DbError> {
    count_where(conn, Table::Customers, Column::All, Column::ShortName, short_name)
}

pub fn get_customer(conn: &Connection, customer_id: i64) -> Result<Option<Customer>, DbError> {
    let sql = format!("SELECT {} FROM Customers WHERE Customer_ID = ?;", Customer::COLUMNS);
    query_first(conn, &sql, &[customer_id.into()], Customer::from_row)
}

pub fn get_customer_by_short_name(
    conn: &Connection,
    short_name: &str,
) -> Result<Option<Customer>, DbError> {
    let sql = format!(
        "SELECT {} FROM Customers WHERE Customer_Short_Name = ?;",
        Customer::COLUMNS
    );
    query_first(conn, &sql, &[short_name.into()], Customer::from_row)
}

/// All customers ordered by id.
pub fn list_customers(conn: &Connection) -> Result<Vec<Customer>, DbError> {
    let sql = format!("SELECT {} FROM Customers ORDER BY Customer_ID;", Customer::COLUMNS);
    query_params(conn, &sql, &[], Customer::from_row)
}

/// Insert a customer and return its new id.
///
/// Uniqueness of the short name is the caller's check; a duplicate that slips
/// through fails at step time on the UNIQUE constraint.
pub fn insert_customer(conn: &Connection, customer: &NewCustomer) -> Result<i64, DbError> {
    execute_params(
        conn,
        INSERT,
        &[
            customer.short_name.as_str().into(),
            SqlParam::text_or_null(customer.names.first_name.as_deref()),
            SqlParam::text_or_null(customer.names.last_name.as_deref()),
            SqlParam::text_or_null(customer.names.group_name.as_deref()),
            customer.credit.credit_limit.into(),
            customer.credit.outstanding_credit.into(),
        ],
    )?;
    let id = conn.last_insert_rowid();
    info!(customer_id = id, short_name = %customer.short_name, "customer inserted");
    Ok(id)
}

/// Overwrite the name fields. Returns rows changed.
pub fn update_customer_names(
    conn: &Connection,
    customer_id: i64,
    names: &CustomerNames,
) -> Result<usize, DbError> {
    execute_params(
        conn,
        UPDATE_NAMES,
        &[
            SqlParam::text_or_null(names.first_name.as_deref()),
            SqlParam::text_or_null(names.last_name.as_deref()),
            SqlParam::text_or_null(names.group_name.as_deref()),
            customer_id.into(),
        ],
    )
}

pub fn update_customer_credit(
    conn: &Connection,
    customer_id: i64,
    credit: CreditTerms,
) -> Result<usize, DbError> {
    execute_params(
        conn,
        UPDATE_CREDIT,
        &[
            credit.credit_limit.into(),
            credit.outstanding_credit.into(),
            customer_id.into(),
        ],
    )
}

/// Delete a customer's addresses, then the customer, in one transaction.
///
/// Either both deletes commit or neither does.
pub fn delete_customer_cascade(
    conn: &Connection,
    customer_id: i64,
) -> Result<CascadeDeletion, DbError> {
    let tx = conn.unchecked_transaction().map_err(|e| DbError::Transaction {
        message: e.to_string(),
    })?;

    // Dropping `tx` on an early return rolls both deletes back.
    let addresses_deleted = execute_params(&tx, DELETE_ADDRESSES, &[customer_id.into()])?;
    let customers_deleted = execute_params(&tx, DELETE_CUSTOMER, &[customer_id.into()])?;

    tx.commit().map_err(|e| {
        warn!(customer_id, error = %e, "cascade delete commit failed");
        DbError::Transaction {
            message: e.to_string(),
        }
    })?;

    info!(customer_id, addresses_deleted, customers_deleted, "customer deleted");
    Ok(CascadeDeletion {
        addresses_deleted,
        customers_deleted,
    })
}
