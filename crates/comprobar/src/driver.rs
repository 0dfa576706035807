//! Page seam between the scenario runner and the browser.
//!
//! The runner only ever talks to a [`CalculatorPage`]. The CDP-backed
//! implementation lives in [`crate::browser`] behind the `browser`
//! feature; [`MockCalculatorPage`] implements the same observable
//! contract in-process so runner logic is testable without chromium.

use crate::keypad::{Key, DISPLAY_SELECTOR};
use crate::result::{SuiteError, SuiteResult};
use crate::scenario::EXPECTED_TITLE;
use async_trait::async_trait;
use std::collections::HashSet;

/// A live rendering of the calculator, reduced to the three operations
/// a scenario needs.
///
/// Implementations must complete each `press` before the caller issues
/// the next one; the runner never overlaps activations because
/// calculator state is order-dependent.
#[async_trait]
pub trait CalculatorPage: Send {
    /// Activate one calculator key
    async fn press(&mut self, key: Key) -> SuiteResult<()>;

    /// Read the display snapshot
    async fn display(&self) -> SuiteResult<String>;

    /// Read the page title
    async fn title(&self) -> SuiteResult<String>;

    /// Release the page once its scenario is done
    async fn close(self) -> SuiteResult<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

/// Binary operator in the mock's pending expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Mock page for unit testing the runner without a browser.
///
/// Honours the observable contract of the application: multiply and
/// divide bind before add and subtract, division by zero displays
/// `ERR`, clear resets to `0`, and decimal digits compose positionally.
#[derive(Debug, Default)]
pub struct MockCalculatorPage {
    /// Digits typed since the last operator
    entry: String,
    /// Completed operands
    operands: Vec<f64>,
    /// Operators between operands
    operators: Vec<Op>,
    /// Current display text
    display: String,
    /// Selectors that should report as missing
    missing: HashSet<&'static str>,
    /// Fixed display text overriding the evaluator, for mismatch tests
    display_override: Option<String>,
    /// Every key pressed, in order
    presses: Vec<Key>,
}

impl MockCalculatorPage {
    /// Create a mock page showing `0`
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            ..Self::default()
        }
    }

    /// Make a key's selector resolve to no element
    #[must_use]
    pub fn with_missing_control(mut self, key: Key) -> Self {
        self.missing.insert(key.selector());
        self
    }

    /// Pin the display to a fixed string regardless of input
    #[must_use]
    pub fn with_display_override(mut self, text: impl Into<String>) -> Self {
        self.display_override = Some(text.into());
        self
    }

    /// Keys pressed so far, in activation order
    #[must_use]
    pub fn presses(&self) -> &[Key] {
        &self.presses
    }

    /// Current operand entry, completing it if digits are pending
    fn flush_entry(&mut self) {
        if self.entry.is_empty() {
            // Leading operator: treat the missing operand as zero
            if self.operands.len() == self.operators.len() {
                self.operands.push(0.0);
            }
            return;
        }
        let value = self.entry.parse::<f64>().unwrap_or(0.0);
        self.operands.push(value);
        self.entry.clear();
    }

    /// Evaluate the pending expression with ×/÷ binding before +/−.
    /// Returns `None` on division by zero.
    fn evaluate(&mut self) -> Option<f64> {
        self.flush_entry();
        // Drop a trailing operator with no right-hand operand
        while self.operators.len() >= self.operands.len() {
            self.operators.pop();
        }

        let mut values = Vec::with_capacity(self.operands.len());
        let mut pending = Vec::with_capacity(self.operators.len());
        let mut operands = self.operands.drain(..);
        let operators = std::mem::take(&mut self.operators);

        values.push(operands.next()?);
        for (op, rhs) in operators.into_iter().zip(operands) {
            match op {
                Op::Multiply => {
                    let last = values.last_mut()?;
                    *last *= rhs;
                }
                Op::Divide => {
                    if rhs == 0.0 {
                        return None;
                    }
                    let last = values.last_mut()?;
                    *last /= rhs;
                }
                Op::Add | Op::Subtract => {
                    pending.push(op);
                    values.push(rhs);
                }
            }
        }

        let mut values = values.into_iter();
        let mut total = values.next()?;
        for (op, rhs) in pending.into_iter().zip(values) {
            match op {
                Op::Add => total += rhs,
                Op::Subtract => total -= rhs,
                Op::Multiply | Op::Divide => {}
            }
        }
        Some(total)
    }

    fn press_operator(&mut self, op: Op) {
        self.flush_entry();
        self.operators.push(op);
    }

    fn apply(&mut self, key: Key) {
        match key {
            Key::Add => self.press_operator(Op::Add),
            Key::Subtract => self.press_operator(Op::Subtract),
            Key::Multiply => self.press_operator(Op::Multiply),
            Key::Divide => self.press_operator(Op::Divide),
            Key::Equals => {
                self.display = match self.evaluate() {
                    Some(value) => format!("{value}"),
                    None => "ERR".to_string(),
                };
                self.entry.clear();
            }
            Key::Clear => {
                self.entry.clear();
                self.operands.clear();
                self.operators.clear();
                self.display = "0".to_string();
            }
            Key::Decimal => {
                if !self.entry.contains('.') {
                    self.entry.push('.');
                }
                self.display = self.entry.clone();
            }
            _ => {
                if let Some(digit) = key.digit_value() {
                    self.entry.push(char::from(b'0' + digit));
                    self.display = self.entry.clone();
                }
            }
        }
    }
}

#[async_trait]
impl CalculatorPage for MockCalculatorPage {
    async fn press(&mut self, key: Key) -> SuiteResult<()> {
        if self.missing.contains(key.selector()) {
            return Err(SuiteError::missing_control(key.selector()));
        }
        self.presses.push(key);
        self.apply(key);
        Ok(())
    }

    async fn display(&self) -> SuiteResult<String> {
        if self.missing.contains(DISPLAY_SELECTOR) {
            return Err(SuiteError::missing_control(DISPLAY_SELECTOR));
        }
        if let Some(ref text) = self.display_override {
            return Ok(text.clone());
        }
        Ok(self.display.clone())
    }

    async fn title(&self) -> SuiteResult<String> {
        Ok(EXPECTED_TITLE.to_string())
    }
}
