//! Calculator keypad model and selector map.
//!
//! The selectors here are the sole coupling surface between the suite
//! and the application: one stable CSS class per key, plus one class
//! for the display element. Keys are named variants rather than raw
//! selector strings so an invalid key cannot be constructed.

use serde::{Deserialize, Serialize};

/// CSS selector for the display element
pub const DISPLAY_SELECTOR: &str = ".calculator-display";

/// One calculator key, identified by a stable selector token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Digit 0
    Zero,
    /// Digit 1
    One,
    /// Digit 2
    Two,
    /// Digit 3
    Three,
    /// Digit 4
    Four,
    /// Digit 5
    Five,
    /// Digit 6
    Six,
    /// Digit 7
    Seven,
    /// Digit 8
    Eight,
    /// Digit 9
    Nine,
    /// Addition operator
    Add,
    /// Subtraction operator
    Subtract,
    /// Multiplication operator
    Multiply,
    /// Division operator
    Divide,
    /// Evaluate the pending expression
    Equals,
    /// Reset the pending expression and display
    Clear,
    /// Decimal point
    Decimal,
}

impl Key {
    /// Look up the digit key for a value in 0..=9
    #[must_use]
    pub const fn digit(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Zero),
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            6 => Some(Self::Six),
            7 => Some(Self::Seven),
            8 => Some(Self::Eight),
            9 => Some(Self::Nine),
            _ => None,
        }
    }

    /// CSS selector for this key's button element
    #[must_use]
    pub const fn selector(&self) -> &'static str {
        match self {
            Self::Zero => ".key-0",
            Self::One => ".key-1",
            Self::Two => ".key-2",
            Self::Three => ".key-3",
            Self::Four => ".key-4",
            Self::Five => ".key-5",
            Self::Six => ".key-6",
            Self::Seven => ".key-7",
            Self::Eight => ".key-8",
            Self::Nine => ".key-9",
            Self::Add => ".key-add",
            Self::Subtract => ".key-subtract",
            Self::Multiply => ".key-multiply",
            Self::Divide => ".key-divide",
            Self::Equals => ".key-equals",
            Self::Clear => ".key-clear",
            Self::Decimal => ".key-decimal",
        }
    }

    /// Short label for logs and scenario listings
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Zero => "0",
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Equals => "=",
            Self::Clear => "C",
            Self::Decimal => ".",
        }
    }

    /// Digit value if this is a digit key
    #[must_use]
    pub const fn digit_value(&self) -> Option<u8> {
        match self {
            Self::Zero => Some(0),
            Self::One => Some(1),
            Self::Two => Some(2),
            Self::Three => Some(3),
            Self::Four => Some(4),
            Self::Five => Some(5),
            Self::Six => Some(6),
            Self::Seven => Some(7),
            Self::Eight => Some(8),
            Self::Nine => Some(9),
            _ => None,
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_selectors() {
        assert_eq!(Key::One.selector(), ".key-1");
        assert_eq!(Key::Zero.selector(), ".key-0");
        assert_eq!(Key::Nine.selector(), ".key-9");
    }

    #[test]
    fn test_operator_selectors() {
        assert_eq!(Key::Add.selector(), ".key-add");
        assert_eq!(Key::Subtract.selector(), ".key-subtract");
        assert_eq!(Key::Multiply.selector(), ".key-multiply");
        assert_eq!(Key::Divide.selector(), ".key-divide");
        assert_eq!(Key::Equals.selector(), ".key-equals");
        assert_eq!(Key::Clear.selector(), ".key-clear");
        assert_eq!(Key::Decimal.selector(), ".key-decimal");
    }

    #[test]
    fn test_digit_lookup() {
        assert_eq!(Key::digit(7), Some(Key::Seven));
        assert_eq!(Key::digit(0), Some(Key::Zero));
        assert_eq!(Key::digit(10), None);
    }

    #[test]
    fn test_digit_value_round_trip() {
        for value in 0..=9 {
            let key = Key::digit(value).unwrap();
            assert_eq!(key.digit_value(), Some(value));
        }
        assert_eq!(Key::Add.digit_value(), None);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Key::Multiply.to_string(), "*");
        assert_eq!(Key::Five.to_string(), "5");
    }

    #[test]
    fn test_display_selector() {
        assert_eq!(DISPLAY_SELECTOR, ".calculator-display");
    }
}
