//! Record types for customers and addresses, and operation outcomes.

mod address;
mod customer;
mod outcome;

pub use address::{Address, AddressFields};
pub use customer::{CreditTerms, Customer, CustomerNames, NewCustomer};
pub use outcome::{AddressSelection, CascadeDeletion, CustomerLookup, ResolvedCustomer};

use std::fmt;

use rusqlite::types::ValueRef;
use rusqlite::Row;

use crate::db::display_value;

/// Read a currency column as whole units.
///
/// The amount columns have NUMERIC affinity, so rows written outside the
/// tool may hold reals or numeric text; those are rounded. NULL and values
/// that are not numbers read as `None`.
pub(crate) fn read_amount(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<i64>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Integer(i) => Some(i),
        ValueRef::Real(f) => Some(f.round() as i64),
        ValueRef::Text(t) => {
            let text = String::from_utf8_lossy(t);
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().map(|f| f.round() as i64))
        }
        ValueRef::Null | ValueRef::Blob(_) => None,
    })
}

/// Read a column as display text whatever its storage class.
///
/// `date` columns have NUMERIC affinity, so a date written as a bare number
/// comes back as an integer.
pub(crate) fn read_text(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    Ok(display_value(row.get_ref(idx)?))
}

/// Write `label : value` lines, printing `NULL` for absent values.
pub(crate) fn write_fields(
    f: &mut fmt::Formatter<'_>,
    fields: &[(&str, Option<String>)],
) -> fmt::Result {
    for (label, value) in fields {
        writeln!(f, "{} : {}", label, value.as_deref().unwrap_or("NULL"))?;
    }
    Ok(())
}
