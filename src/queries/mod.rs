//! Typed, parameterized queries over the two tables.
//!
//! Every value that originates with the operator is bound through
//! [`crate::db::execute_params`] or [`crate::db::query_params`]. Nothing here
//! formats operator text into statement text.

pub mod addresses;
pub mod customers;
