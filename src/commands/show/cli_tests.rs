//! CLI parsing tests for show command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_required_arg_test! {
        command: "show",
        test_name: test_show_requires_short_name,
        required_arg: "--short-name",
    }

    crate::cli_option_test! {
        command: "show",
        variant: Show,
        test_name: test_show_with_short_name,
        args: ["-s", "JSMITH"],
        field: short_name,
        expected: "JSMITH",
    }
}
