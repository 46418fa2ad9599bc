mod cli_tests;
mod execute;
mod output;

use clap::Args;

/// List addresses
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  customer_tracker addresses                    # Every address
  customer_tracker addresses -s ABAKER          # Only ABAKER's addresses")]
pub struct AddressesCmd {
    /// Only addresses of the customer with this short name
    #[arg(short, long)]
    pub short_name: Option<String>,
}
