mod execute;
mod output;

use clap::Args;

/// List every customer
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  customer_tracker customers                 # Table of all customers
  customer_tracker customers --format json   # Same, as JSON")]
pub struct CustomersCmd {}
