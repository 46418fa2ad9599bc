//! Table bootstrap and demonstration data.
//!
//! Both tables are created with `CREATE TABLE IF NOT EXISTS`; there is no
//! versioning beyond that. Seeding uses `INSERT OR IGNORE` with fixed ids so a
//! repeated seed never duplicates rows.

use rusqlite::Connection;
use serde::Serialize;
use tracing::info;

use super::executor::{execute_trusted, query_first};
use super::sql::{Table, TrustedSql};
use super::DbError;

const CREATE_CUSTOMERS: TrustedSql = TrustedSql::new(
    "CREATE TABLE IF NOT EXISTS Customers(
        Customer_ID INTEGER PRIMARY KEY AUTOINCREMENT,
        Customer_Short_Name varchar(20) NOT NULL UNIQUE,
        First_Name varchar(20),
        Last_Name varchar(20),
        Group_Name varchar(20),
        Credit_Limit number(15,2),
        Outstanding_Credit number(15,2),
        Created_On date,
        Updated_On date);",
);

const CREATE_ADDRESSES: TrustedSql = TrustedSql::new(
    "CREATE TABLE IF NOT EXISTS CustomerAddress(
        Address_ID INTEGER PRIMARY KEY AUTOINCREMENT,
        Customer_ID int NOT NULL,
        Address_Type varchar(10),
        Contact_Name varchar(50),
        Address_Line_1 varchar(50) NOT NULL,
        Address_Line_2 varchar(50),
        Address_Line_3 varchar(50),
        Address_Line_4 varchar(50),
        Address_Line_5 varchar(50),
        Created_On date,
        Updated_On date,
        FOREIGN KEY(Customer_ID) REFERENCES Customers(Customer_ID));",
);

const SEED_CUSTOMERS: TrustedSql = TrustedSql::new(
    "INSERT OR IGNORE INTO Customers(Customer_ID, Customer_Short_Name, First_Name, Last_Name, Group_Name, Credit_Limit, Outstanding_Credit, Created_On, Updated_On) VALUES
        (1, 'JSMITH', 'John', 'Smith', 'SMITH FAMILY', 10000, 0, DATE('now'), DATE('now')),
        (2, 'MSMITH', 'Mary', 'Smith', 'SMITH FAMILY', 10000, 0, DATE('now'), DATE('now')),
        (3, 'BSMITH', 'Bob', 'Smith', 'SMITH FAMILY', 5000, 0, DATE('now'), DATE('now')),
        (4, 'BJONES', 'Brian', 'Jones', 'JONES FAMILY', 5000, 0, DATE('now'), DATE('now')),
        (5, 'DTRACEY', 'Donald', 'Tracey', 'TRACEY FAMILY', 3000, 0, DATE('now'), DATE('now')),
        (6, 'ABAKER', 'Anthony', 'Baker', 'BAKER FAMILY', 5000, 0, DATE('now'), DATE('now')),
        (7, 'AMCKECHNIE', 'Alastair', 'McKechnie', 'MCKECHNIE FAMILY', 7000, 0, DATE('now'), DATE('now')),
        (8, 'RGOULDING', 'Robert', 'Goulding', 'GOULDING', 5000, 0, DATE('now'), DATE('now'));",
);

const SEED_ADDRESSES: TrustedSql = TrustedSql::new(
    "INSERT OR IGNORE INTO CustomerAddress(Address_ID, Customer_ID, Address_Type, Contact_Name, Address_Line_1, Address_Line_2, Address_Line_3, Address_Line_4, Address_Line_5, Created_On, Updated_On) VALUES
        (1, (SELECT Customer_ID FROM Customers WHERE Customer_Short_Name = 'JSMITH'), 'HOME', NULL, '1 Regent Road', 'London', 'W12 5GG', NULL, NULL, DATE('now'), DATE('now')),
        (2, (SELECT Customer_ID FROM Customers WHERE Customer_Short_Name = 'MSMITH'), 'HOME', NULL, '1 Regent Road', 'London', 'W12 5GG', NULL, NULL, DATE('now'), DATE('now')),
        (3, (SELECT Customer_ID FROM Customers WHERE Customer_Short_Name = 'BSMITH'), 'HOME', NULL, '1 Regent Road', 'London', 'W12 5GG', NULL, NULL, DATE('now'), DATE('now')),
        (4, (SELECT Customer_ID FROM Customers WHERE Customer_Short_Name = 'JSMITH'), 'WORK', NULL, '26 Lombard Street', 'London', 'EC4', NULL, NULL, DATE('now'), DATE('now')),
        (5, (SELECT Customer_ID FROM Customers WHERE Customer_Short_Name = 'DTRACEY'), 'HOME', NULL, '5 Bright Street', 'Dorking', 'Surrey', NULL, NULL, DATE('now'), DATE('now')),
        (6, (SELECT Customer_ID FROM Customers WHERE Customer_Short_Name = 'ABAKER'), 'HOME', NULL, '21 Hope Street', 'Barnet', 'Middlesex', NULL, NULL, DATE('now'), DATE('now')),
        (7, (SELECT Customer_ID FROM Customers WHERE Customer_Short_Name = 'ABAKER'), 'WORK', NULL, '1 Canada Square', 'Canary Wharf', 'London', NULL, NULL, DATE('now'), DATE('now')),
        (8, (SELECT Customer_ID FROM Customers WHERE Customer_Short_Name = 'ABAKER'), 'UNKNOWN', NULL, '17 Broad Street', 'London', 'EC3', NULL, NULL, DATE('now'), DATE('now'));",
);

const TABLE_EXISTS: &str = "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?;";

const CUSTOMERS_EMPTY: &str =
    "SELECT CASE WHEN EXISTS (SELECT * FROM Customers) THEN 0 ELSE 1 END;";

/// Whether bootstrap created a table or found it already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableState {
    Created,
    AlreadyExists,
}

/// Bootstrap status for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableStatus {
    pub name: String,
    pub state: TableState,
}

fn table_exists(conn: &Connection, table: Table) -> Result<bool, DbError> {
    let count = query_first(conn, TABLE_EXISTS, &[table.as_str().into()], |row| {
        row.get::<_, i64>(0)
    })?;
    Ok(count.unwrap_or(0) > 0)
}

/// Create both tables if absent, reporting what happened to each.
pub fn bootstrap(conn: &Connection) -> Result<Vec<TableStatus>, DbError> {
    let mut statuses = Vec::with_capacity(2);
    for (table, ddl) in [
        (Table::Customers, CREATE_CUSTOMERS),
        (Table::Addresses, CREATE_ADDRESSES),
    ] {
        let state = if table_exists(conn, table)? {
            TableState::AlreadyExists
        } else {
            execute_trusted(conn, ddl)?;
            info!(table = table.as_str(), "table created");
            TableState::Created
        };
        statuses.push(TableStatus {
            name: table.as_str().to_string(),
            state,
        });
    }
    Ok(statuses)
}

/// True when the Customers table holds no rows.
pub fn customers_empty(conn: &Connection) -> Result<bool, DbError> {
    let flag = query_first(conn, CUSTOMERS_EMPTY, &[], |row| row.get::<_, i64>(0))?
        .ok_or_else(|| DbError::NoRow {
            sql: CUSTOMERS_EMPTY.to_string(),
        })?;
    Ok(flag == 1)
}

/// Insert the demonstration customers and addresses.
pub fn seed_sample_data(conn: &Connection) -> Result<(), DbError> {
    execute_trusted(conn, SEED_CUSTOMERS)?;
    execute_trusted(conn, SEED_ADDRESSES)?;
    info!("sample data inserted");
    Ok(())
}

/// Seed only when the Customers table is empty. Returns whether it seeded.
pub fn seed_if_empty(conn: &Connection) -> Result<bool, DbError> {
    if customers_empty(conn)? {
        seed_sample_data(conn)?;
        Ok(true)
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{count, open_mem_db, Column};
    use rstest::rstest;
    use tempfile::NamedTempFile;

    #[rstest]
    fn test_bootstrap_creates_both_tables() {
        let conn = open_mem_db().unwrap();
        let statuses = bootstrap(&conn).unwrap();
        assert_eq!(statuses.len(), 2);
        assert!(statuses.iter().all(|s| s.state == TableState::Created));
        assert_eq!(statuses[0].name, "Customers");
        assert_eq!(statuses[1].name, "CustomerAddress");
    }

    #[rstest]
    fn test_bootstrap_idempotent() {
        let file = NamedTempFile::new().unwrap();
        let conn = crate::db::open_db(file.path()).unwrap();
        bootstrap(&conn).unwrap();
        let again = bootstrap(&conn).unwrap();
        assert!(again.iter().all(|s| s.state == TableState::AlreadyExists));
    }

    #[rstest]
    fn test_seed_if_empty_only_once() {
        let conn = open_mem_db().unwrap();
        bootstrap(&conn).unwrap();
        assert!(customers_empty(&conn).unwrap());

        assert!(seed_if_empty(&conn).unwrap());
        assert!(!seed_if_empty(&conn).unwrap());

        assert_eq!(count(&conn, Table::Customers, Column::All).unwrap(), 8);
        assert_eq!(count(&conn, Table::Addresses, Column::All).unwrap(), 8);
    }

    #[rstest]
    fn test_seed_uses_null_not_empty_strings() {
        let conn = open_mem_db().unwrap();
        bootstrap(&conn).unwrap();
        seed_sample_data(&conn).unwrap();
        let empties: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM CustomerAddress WHERE Contact_Name = '' OR Address_Line_4 = ''",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(empties, 0);
    }
}
