//! customer_tracker library - customer and address record manager
//!
//! Provides the SQLite access layer, the interactive console workflows, and
//! the command execution and output formatting infrastructure for managing
//! customers and their addresses.

pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod db;
pub mod logging;
pub mod output;
pub mod queries;
pub mod shell;
pub mod types;
pub mod utils;
pub mod workflows;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod test_utils;
