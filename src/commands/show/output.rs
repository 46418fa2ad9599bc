//! Output formatting for show command results.

use super::execute::ShowResult;
use crate::output::Outputable;

impl Outputable for ShowResult {
    fn to_table(&self) -> String {
        let mut output = String::new();

        output.push_str("Customer Data:\n");
        output.push_str(&self.customer.to_string());
        output.push_str(&format!(
            "\nCustomer {} is associated with {} addresses:\n",
            self.customer.short_name,
            self.addresses.len()
        ));
        for address in &self.addresses {
            output.push('\n');
            output.push_str(&address.to_string());
        }

        output.trim_end().to_string()
    }
}
