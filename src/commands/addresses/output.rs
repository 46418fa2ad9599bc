//! Output formatting for addresses command results.

use super::execute::AddressesResult;
use crate::output::{cell, Outputable};

impl Outputable for AddressesResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        match &self.short_name {
            Some(name) => lines.push(format!("Addresses for {}", name)),
            None => lines.push("Addresses".to_string()),
        }
        lines.push(String::new());

        if self.addresses.is_empty() {
            lines.push("No addresses found.".to_string());
            return lines.join("\n");
        }

        for a in &self.addresses {
            lines.push(format!(
                "  [{}] customer {} {}: {}",
                a.address_id,
                a.customer_id,
                cell(a.address_type.as_deref()),
                a.one_line()
            ));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Address;
    use rstest::{fixture, rstest};

    #[fixture]
    fn work_address() -> AddressesResult {
        AddressesResult {
            short_name: Some("JSMITH".to_string()),
            addresses: vec![Address {
                address_id: 4,
                customer_id: 1,
                address_type: Some("WORK".to_string()),
                contact_name: None,
                line_1: "26 Lombard Street".to_string(),
                line_2: Some("London".to_string()),
                line_3: Some("EC4".to_string()),
                line_4: None,
                line_5: None,
                created_on: None,
                updated_on: None,
            }],
        }
    }

    #[rstest]
    fn test_table(work_address: AddressesResult) {
        assert_eq!(
            work_address.to_table(),
            "Addresses for JSMITH\n\n  [4] customer 1 WORK: 26 Lombard Street, London, EC4"
        );
    }

    #[rstest]
    fn test_table_empty() {
        let result = AddressesResult {
            short_name: None,
            addresses: vec![],
        };
        assert_eq!(result.to_table(), "Addresses\n\nNo addresses found.");
    }

    crate::output_json_test! {
        test_name: test_json,
        fixture: work_address,
        fixture_type: AddressesResult,
        assertions: {
            "short_name": "JSMITH",
        },
    }
}
