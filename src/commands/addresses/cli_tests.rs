//! CLI parsing tests for addresses command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_defaults_test! {
        command: "addresses",
        variant: Addresses,
        required_args: [],
        defaults: {
            short_name: None,
        },
    }

    crate::cli_option_test! {
        command: "addresses",
        variant: Addresses,
        test_name: test_addresses_with_short_name,
        args: ["--short-name", "ABAKER"],
        field: short_name,
        expected: Some("ABAKER".to_string()),
    }
}
