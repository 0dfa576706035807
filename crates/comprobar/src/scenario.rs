//! Scenario model: one end-to-end test case as static data.

use crate::keypad::Key;
use serde::{Deserialize, Serialize};

/// Expected page title of the application under test
pub const EXPECTED_TITLE: &str = "Calculator App";

/// One end-to-end test case: an ordered key sequence plus the exact
/// display text expected after the final key.
///
/// Scenarios are static data; execution order of keys must match
/// declaration order because calculator state is cumulative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name, used in reports
    pub name: String,
    /// Ordered key sequence
    pub keys: Vec<Key>,
    /// Exact expected display text (no normalization)
    pub expected: String,
}

impl Scenario {
    /// Create a new scenario
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        keys: impl Into<Vec<Key>>,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            keys: keys.into(),
            expected: expected.into(),
        }
    }

    /// Number of key activations in this scenario
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Key sequence as a compact string, e.g. `1+2*7=`
    #[must_use]
    pub fn key_sequence(&self) -> String {
        self.keys.iter().map(Key::label).collect()
    }
}

/// The authoritative scenario set for the calculator UI.
///
/// Each scenario owns a fresh page when executed, so no state survives
/// across scenarios and the set can run in any order.
#[must_use]
pub fn default_suite() -> Vec<Scenario> {
    use Key::{Add, Clear, Decimal, Divide, Equals, Five, Multiply, One, Seven, Subtract, Three,
              Two, Zero, Four};

    vec![
        Scenario::new("adds 1 + 1", [One, Add, One, Equals], "2"),
        Scenario::new("subtracts 1 - 1", [One, Subtract, One, Equals], "0"),
        Scenario::new("multiplies 2 * 2", [Two, Multiply, Two, Equals], "4"),
        Scenario::new("divides 4 / 2", [Four, Divide, Two, Equals], "2"),
        Scenario::new(
            "division by zero displays ERR",
            [One, Divide, Zero, Equals],
            "ERR",
        ),
        Scenario::new(
            "multiplication binds before addition",
            [One, Add, Two, Multiply, Seven, Equals],
            "15",
        ),
        Scenario::new(
            "chains addition and subtraction",
            [One, Add, Two, Subtract, Three, Equals],
            "0",
        ),
        Scenario::new(
            "divide and multiply bind before add and subtract",
            [One, Add, Two, Divide, Two, Subtract, Three, Multiply, Zero, Equals],
            "2",
        ),
        Scenario::new(
            "clear resets the pending expression",
            [One, Add, Two, Clear],
            "0",
        ),
        Scenario::new(
            "multiplies decimals exactly",
            [Zero, Decimal, Two, Five, Multiply, Decimal, One, Two, Five, Equals],
            "0.03125",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_size() {
        assert_eq!(default_suite().len(), 10);
    }

    #[test]
    fn test_scenario_names_are_unique() {
        let suite = default_suite();
        let mut names: Vec<_> = suite.iter().map(|s| s.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), suite.len());
    }

    #[test]
    fn test_every_scenario_ends_with_equals_or_clear() {
        for scenario in default_suite() {
            let last = *scenario.keys.last().unwrap();
            assert!(
                last == Key::Equals || last == Key::Clear,
                "scenario '{}' ends with {last}",
                scenario.name
            );
        }
    }

    #[test]
    fn test_addition_scenario_shape() {
        let suite = default_suite();
        let add = &suite[0];
        assert_eq!(add.keys, vec![Key::One, Key::Add, Key::One, Key::Equals]);
        assert_eq!(add.expected, "2");
        assert_eq!(add.key_count(), 4);
    }

    #[test]
    fn test_key_sequence_rendering() {
        let suite = default_suite();
        let precedence = &suite[5];
        assert_eq!(precedence.key_sequence(), "1+2*7=");
    }

    #[test]
    fn test_decimal_scenario_expected_product() {
        let suite = default_suite();
        let decimal = suite.last().unwrap();
        assert_eq!(decimal.expected, "0.03125");
        assert_eq!(decimal.key_sequence(), "0.25*.125=");
    }

    #[test]
    fn test_scenario_serializes() {
        let scenario = Scenario::new("roundtrip", [Key::One, Key::Equals], "1");
        let json = serde_json::to_string(&scenario).unwrap();
        let back: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, "roundtrip");
        assert_eq!(back.keys, scenario.keys);
    }
}
