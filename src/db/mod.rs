//! Relational access layer over a single SQLite connection.
//!
//! This module provides the storage primitives every workflow builds on:
//! - Connection management (file-backed, or in-memory for tests)
//! - Parameterized statement execution with per-stage error reporting
//! - A trusted-literal path for fixed SQL text (DDL, seed rows, fixed SELECTs)
//! - Aggregate counting for existence and relationship checks
//! - Schema bootstrap and demonstration data
//!
//! # Trusted and untrusted fragments
//!
//! Operator input only ever reaches SQLite as a bound parameter. The only
//! fragments spliced into statement text are table and column identifiers
//! taken from the [`Table`] and [`Column`] allow-lists, and whole statements
//! wrapped in [`TrustedSql`], which can only be built from `&'static str`.
//!
//! # Statement lifetime
//!
//! Each function prepares and owns its own `rusqlite::Statement`. The handle
//! is finalized when it drops, so a prepare, bind, or step failure never
//! leaves a half-bound statement behind.

mod connection;
mod counter;
mod executor;
pub mod schema;
mod sql;
mod value;

pub use connection::{close_db, open_db, open_mem_db};
pub use counter::{count, count_where};
pub use executor::{execute_params, execute_trusted, query_first, query_params, query_trusted};
pub use sql::{Column, Table, TrustedSql};
pub use value::{display_value, RecordRow, SqlParam};

use thiserror::Error;

/// Database error types, one variant per failure stage.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to open database '{path}': {message}")]
    OpenFailed { path: String, message: String },

    #[error("Failed to close database: {message}")]
    CloseFailed { message: String },

    #[error("Error preparing statement: {message}")]
    Prepare { sql: String, message: String },

    #[error("Error binding parameter {index} to statement: {message}")]
    Bind {
        sql: String,
        index: usize,
        message: String,
    },

    #[error("Statement expects {expected} parameters but {actual} were supplied")]
    BindCount {
        sql: String,
        expected: usize,
        actual: usize,
    },

    #[error("Error executing statement: {message}")]
    Step { sql: String, message: String },

    #[error("Statement returned no row")]
    NoRow { sql: String },

    #[error("Transaction failed: {message}")]
    Transaction { message: String },
}

impl DbError {
    pub(crate) fn prepare(sql: &str, err: rusqlite::Error) -> Self {
        Self::Prepare {
            sql: sql.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn step(sql: &str, err: rusqlite::Error) -> Self {
        Self::Step {
            sql: sql.to_string(),
            message: err.to_string(),
        }
    }

    /// Short name of the stage that failed, for logging.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::OpenFailed { .. } => "open",
            Self::CloseFailed { .. } => "close",
            Self::Prepare { .. } => "prepare",
            Self::Bind { .. } | Self::BindCount { .. } => "bind",
            Self::Step { .. } => "step",
            Self::NoRow { .. } => "no_row",
            Self::Transaction { .. } => "transaction",
        }
    }
}
