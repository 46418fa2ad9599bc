//! Expected outcomes of lookups and deletions.
//!
//! Storage failures travel separately as `Err(DbError)`; the variants here
//! are the negative results an operator can legitimately run into.

use serde::Serialize;

/// Result of looking a customer up by short name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerLookup {
    Found(i64),
    NotFound,
}

/// A customer whose short name has been confirmed and id resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCustomer {
    pub short_name: String,
    pub customer_id: i64,
}

/// Result of the list-then-select address protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressSelection {
    /// An address id belonging to the customer.
    Selected(i64),
    /// The short name no longer resolves to a customer.
    CustomerNotFound,
    /// The customer exists but owns no addresses.
    NoAddresses,
}

/// Rows removed by a customer cascade delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CascadeDeletion {
    pub addresses_deleted: usize,
    pub customers_deleted: usize,
}
