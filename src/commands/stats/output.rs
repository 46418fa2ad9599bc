use super::execute::StatsResult;
use crate::output::Outputable;

impl Outputable for StatsResult {
    fn to_table(&self) -> String {
        format!(
            "Currently storing {} customers and {} addresses.",
            self.customers, self.addresses
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn stats() -> StatsResult {
        StatsResult {
            customers: 8,
            addresses: 3,
        }
    }

    #[rstest]
    fn test_table(stats: StatsResult) {
        assert_eq!(stats.to_table(), "Currently storing 8 customers and 3 addresses.");
    }

    crate::output_json_test! {
        test_name: test_json,
        fixture: stats,
        fixture_type: StatsResult,
        assertions: {
            "customers": 8,
            "addresses": 3,
        },
    }

    crate::output_toon_test! {
        test_name: test_toon,
        fixture: stats,
        fixture_type: StatsResult,
        contains: ["customers: 8", "addresses: 3"],
    }
}
