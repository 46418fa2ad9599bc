//! Output formatting for customers command results.

use super::execute::CustomersResult;
use crate::output::{cell, Outputable};

impl Outputable for CustomersResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        if self.customers.is_empty() {
            lines.push("No customers found.".to_string());
            return lines.join("\n");
        }

        lines.push(format!("Customers ({}):", self.customers.len()));
        for c in &self.customers {
            lines.push(format!(
                "  [{}] {} {} (group: {}, credit: {}/{})",
                c.customer_id,
                c.short_name,
                c.display_name(),
                cell(c.group_name.as_deref()),
                cell(c.credit_limit),
                cell(c.outstanding_credit),
            ));
        }

        lines.join("\n")
    }
}
