//! Interactive workflows composed from the query layer and the console.
//!
//! - [`resolver`]: short name to customer id
//! - [`disambiguator`]: pick one address out of a customer's addresses
//! - [`mutators`]: insert, update and delete flows for both tables
//!
//! Expected negatives (unknown customer, no addresses, operator declined) are
//! returned as values. Only console and storage failures are errors.

pub mod disambiguator;
pub mod mutators;
pub mod resolver;

pub use disambiguator::{select_address, select_customer_address};
pub use mutators::Outcome;
pub use resolver::{prompt_customer, prompt_short_name};

use thiserror::Error;

use crate::console::InputError;
use crate::db::DbError;

#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Db(#[from] DbError),
}
